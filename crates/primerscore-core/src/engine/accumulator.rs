use super::error::EngineError;
use crate::core::io::ipcress::IpcressRecords;
use crate::core::models::histogram::Histogram;
use crate::core::models::ids::{PairId, RowKind};
use crate::core::models::record::MismatchRecord;
use crate::core::models::table::{MismatchRow, MismatchTable, RowKey};
use std::collections::BTreeMap;
use std::io::BufRead;
use tracing::{debug, warn};

/// Builds per-row mismatch histograms from a stream of parsed hits.
///
/// Each hit increments three rows: its 5' primer row at `mismatch_5`, its 3' primer row at
/// `mismatch_3`, and the pair's `Total` row at their sum.
#[derive(Debug)]
pub struct MismatchAccumulator {
    tolerance: u32,
    width: usize,
    rows: BTreeMap<(PairId, RowKind), Histogram>,
    records_seen: u64,
}

impl MismatchAccumulator {
    pub fn new(tolerance: u32) -> Self {
        Self {
            tolerance,
            width: Histogram::width_for(tolerance),
            rows: BTreeMap::new(),
            records_seen: 0,
        }
    }

    pub fn records_seen(&self) -> u64 {
        self.records_seen
    }

    /// Adds one hit. Fails without modifying any row if a bucket falls outside `0..=2M`.
    pub fn add(&mut self, record: &MismatchRecord) -> Result<(), EngineError> {
        let increments = [
            (RowKind::from(record.side_5), u64::from(record.mismatch_5)),
            (RowKind::from(record.side_3), u64::from(record.mismatch_3)),
            (RowKind::Total, record.total_mismatches()),
        ];

        let mut buckets = [0usize; 3];
        for (slot, &(_, observed)) in buckets.iter_mut().zip(&increments) {
            *slot = usize::try_from(observed)
                .ok()
                .filter(|&b| b < self.width)
                .ok_or_else(|| EngineError::MismatchRange {
                    tolerance: self.tolerance,
                    observed,
                    pair_id: record.pair_id.clone(),
                })?;
        }

        for ((kind, _), bucket) in increments.into_iter().zip(buckets) {
            let tolerance = self.tolerance;
            self.rows
                .entry((record.pair_id.clone(), kind))
                .or_insert_with(|| Histogram::new(tolerance))
                .increment(bucket)
                .map_err(|e| {
                    EngineError::Internal(format!(
                        "bucket {} escaped the range check for width {}",
                        e.bucket, e.width
                    ))
                })?;
        }

        self.records_seen += 1;
        Ok(())
    }

    /// Freezes the histograms into a table sorted by `(pair_id, A < B < Total)`.
    pub fn finish(self, source_name: &str) -> Result<MismatchTable, EngineError> {
        if self.rows.is_empty() {
            return Err(EngineError::EmptyInput {
                source_name: source_name.to_string(),
            });
        }
        let rows = self
            .rows
            .into_iter()
            .map(|((pair_id, kind), histogram)| {
                MismatchRow::new(RowKey::Pair { pair_id, kind }, histogram)
            })
            .collect();
        Ok(MismatchTable::new(self.tolerance, rows))
    }
}

/// Drains an iPCRess record stream into a mismatch table.
pub fn accumulate<R: BufRead>(
    mut records: IpcressRecords<R>,
    tolerance: u32,
) -> Result<MismatchTable, EngineError> {
    let mut accumulator = MismatchAccumulator::new(tolerance);
    for record in records.by_ref() {
        accumulator.add(&record?)?;
    }

    if !records.reached_end_marker() {
        warn!(
            source = records.source_name(),
            "Input ended without the iPCRess completion marker; using all lines read."
        );
    }
    debug!(
        records = accumulator.records_seen(),
        rows = accumulator.rows.len(),
        "Accumulated mismatch histograms."
    );

    accumulator.finish(records.source_name())
}
