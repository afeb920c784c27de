use super::ids::{PairId, Side};

/// One parsed iPCRess hit: which primer bound on each end and with how many mismatches.
///
/// Records are consumed by the accumulator as soon as they are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchRecord {
    pub pair_id: PairId,
    pub side_5: Side,
    pub mismatch_5: u32,
    pub side_3: Side,
    pub mismatch_3: u32,
}

impl MismatchRecord {
    /// Bucket of the pair's `Total` row this hit falls into.
    pub fn total_mismatches(&self) -> u64 {
        u64::from(self.mismatch_5) + u64::from(self.mismatch_3)
    }
}
