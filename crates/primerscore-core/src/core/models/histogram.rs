use std::fmt::Write;

/// Occurrence counts indexed by mismatch count.
///
/// Every histogram is created with all `2M + 1` buckets present and zeroed, so lookups of
/// any bucket inside the tolerance window are total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
}

/// Returned when a bucket lies outside the window a histogram was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketOutOfRange {
    pub bucket: usize,
    pub width: usize,
}

impl Histogram {
    /// Creates a zeroed histogram covering buckets `0..=2 * tolerance`.
    pub fn new(tolerance: u32) -> Self {
        Self::with_width(Self::width_for(tolerance))
    }

    pub fn with_width(width: usize) -> Self {
        Self {
            counts: vec![0; width],
        }
    }

    /// Number of buckets a histogram holds for a given mismatch tolerance.
    pub fn width_for(tolerance: u32) -> usize {
        2 * tolerance as usize + 1
    }

    pub fn increment(&mut self, bucket: usize) -> Result<(), BucketOutOfRange> {
        let width = self.counts.len();
        let slot = self
            .counts
            .get_mut(bucket)
            .ok_or(BucketOutOfRange { bucket, width })?;
        *slot += 1;
        Ok(())
    }

    pub fn get(&self, bucket: usize) -> Option<u64> {
        self.counts.get(bucket).copied()
    }

    pub fn width(&self) -> usize {
        self.counts.len()
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Sum over all buckets, i.e. the number of hits folded into this row.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Renders the histogram as a Python-style dict literal, `{'0': 1, '1': 0}`.
    ///
    /// This is the cell format of the `WGE format` output column.
    pub fn to_wge_string(&self) -> String {
        let mut out = String::with_capacity(self.counts.len() * 8 + 2);
        out.push('{');
        for (bucket, count) in self.counts.iter().enumerate() {
            if bucket > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "'{}': {}", bucket, count);
        }
        out.push('}');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_histogram_has_all_buckets_zeroed() {
        let h = Histogram::new(2);
        assert_eq!(h.width(), 5);
        assert!(h.counts().iter().all(|&c| c == 0));
        assert_eq!(Histogram::new(0).width(), 1);
    }

    #[test]
    fn increment_counts_and_rejects_out_of_window_buckets() {
        let mut h = Histogram::new(1);
        h.increment(0).unwrap();
        h.increment(2).unwrap();
        h.increment(2).unwrap();
        assert_eq!(h.counts(), &[1, 0, 2]);
        assert_eq!(h.total(), 3);

        let err = h.increment(3).unwrap_err();
        assert_eq!(err, BucketOutOfRange { bucket: 3, width: 3 });
        assert_eq!(h.total(), 3);
    }

    #[test]
    fn wge_string_matches_python_dict_repr() {
        let mut h = Histogram::new(2);
        h.increment(0).unwrap();
        h.increment(1).unwrap();
        h.increment(2).unwrap();
        h.increment(2).unwrap();
        assert_eq!(h.to_wge_string(), "{'0': 1, '1': 1, '2': 2, '3': 0, '4': 0}");
        assert_eq!(Histogram::new(0).to_wge_string(), "{'0': 0}");
    }
}
