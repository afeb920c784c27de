/// Highest bucket that carries a weight.
pub const MAX_WEIGHTED_BUCKET: usize = 8;

/// Penalty applied to buckets 0 and 1: an off-target hit this close to perfect means the
/// pair cannot be told apart from its target.
pub const NEAR_FAILURE_WEIGHT: u64 = 10_000_000_000;

#[rustfmt::skip]
const WEIGHTS: [u64; MAX_WEIGHTED_BUCKET + 1] = [
    NEAR_FAILURE_WEIGHT, // 0
    NEAR_FAILURE_WEIGHT, // 1
    1_000_000,           // 2 = 10^6
    100_000,             // 3
    10_000,              // 4
    1_000,               // 5
    100,                 // 6
    10,                  // 7
    1,                   // 8 = 10^0
];

/// Weight of one off-target hit in mismatch bucket `bucket`.
///
/// Buckets 0 and 1 weigh `10^10`; bucket `i` in `2..=8` weighs `10^(8 - i)`. Buckets above 8
/// have no weight and return `None`.
pub fn weight(bucket: usize) -> Option<u64> {
    WEIGHTS.get(bucket).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_weights_are_exact() {
        assert_eq!(weight(0), Some(10u64.pow(10)));
        assert_eq!(weight(1), Some(10u64.pow(10)));
        assert_eq!(weight(2), Some(10u64.pow(6)));
        assert_eq!(weight(8), Some(1));
        assert_eq!(weight(9), None);
    }

    #[test]
    fn mid_range_weights_follow_closed_form() {
        for i in 2..=MAX_WEIGHTED_BUCKET {
            assert_eq!(weight(i), Some(10u64.pow((8 - i) as u32)), "bucket {i}");
        }
    }
}
