use super::weights::weight;
use crate::core::models::histogram::Histogram;
use crate::core::models::ids::PairId;
use crate::core::models::table::MismatchTable;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("No on-target hit found for {pair_id}")]
    NoOnTargetHit { pair_id: PairId },
    #[error("Score for {pair_id} does not fit in 64 bits")]
    Overflow { pair_id: PairId },
}

/// Scores the `Total` histogram of one primer pair.
///
/// Bucket 0 must hold at least the on-target hit; that one occurrence is discounted before
/// weighting. Buckets beyond the weight table contribute nothing.
pub fn score_histogram(pair_id: &PairId, total: &Histogram) -> Result<u64, ScoreError> {
    let on_target = total.get(0).unwrap_or(0);
    if on_target == 0 {
        return Err(ScoreError::NoOnTargetHit {
            pair_id: pair_id.clone(),
        });
    }

    let overflow = || ScoreError::Overflow {
        pair_id: pair_id.clone(),
    };

    let mut score: u64 = 0;
    for (bucket, &count) in total.counts().iter().enumerate() {
        let Some(w) = weight(bucket) else {
            break;
        };
        let off_target = if bucket == 0 { count - 1 } else { count };
        let term = off_target.checked_mul(w).ok_or_else(overflow)?;
        score = score.checked_add(term).ok_or_else(overflow)?;
    }
    Ok(score)
}

/// Scores every `Total` row of `table` in place. `A`/`B` rows keep an absent score.
pub fn score_table(table: &mut MismatchTable) -> Result<(), ScoreError> {
    for row in table.rows_mut() {
        if !row.key.kind().is_total() {
            row.score = None;
            continue;
        }
        let score = score_histogram(row.key.pair_id(), &row.histogram)?;
        debug!(pair_id = %row.key.pair_id(), score, "Scored primer pair.");
        row.score = Some(score);
    }
    table.mark_scored();
    Ok(())
}
