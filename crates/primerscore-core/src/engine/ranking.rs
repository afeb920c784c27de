use super::error::EngineError;
use crate::core::models::ids::PairId;
use crate::core::models::table::MismatchTable;
use std::collections::HashMap;
use tracing::debug;

/// Orders a scored table for presentation.
///
/// Rows sort by targeton (when merged), then by the score of their pair's `Total` row, then
/// by pair id, then `A`, `B`, `Total`. All three rows of a pair share the pair's score, so
/// pairs stay contiguous.
pub fn rank_table(table: &mut MismatchTable) -> Result<(), EngineError> {
    if !table.is_scored() {
        return Err(EngineError::Internal(
            "mismatch table must be scored before it can be ranked".to_string(),
        ));
    }

    let pair_scores: HashMap<PairId, u64> = table
        .rows()
        .iter()
        .filter_map(|r| r.score.map(|s| (r.key.pair_id().clone(), s)))
        .collect();

    if let Some(row) = table
        .rows()
        .iter()
        .find(|r| !pair_scores.contains_key(r.key.pair_id()))
    {
        return Err(EngineError::Internal(format!(
            "primer pair {} has no scored Total row",
            row.key.pair_id()
        )));
    }

    table.sort_rows_by(|a, b| {
        let score_a = pair_scores[a.key.pair_id()];
        let score_b = pair_scores[b.key.pair_id()];
        a.key
            .group()
            .cmp(&b.key.group())
            .then(score_a.cmp(&score_b))
            .then_with(|| a.key.pair_id().cmp(b.key.pair_id()))
            .then_with(|| a.key.kind().cmp(&b.key.kind()))
    });

    debug!(pairs = pair_scores.len(), "Ranked primer pairs by score.");
    Ok(())
}
