//! Ranking score for primer pairs.
//!
//! A pair's score is a weighted sum over the buckets of its `Total` histogram, after the
//! single expected on-target hit has been removed from bucket 0. Lower is better.

pub mod scorer;
pub mod weights;

pub use scorer::{ScoreError, score_histogram, score_table};
pub use weights::weight;
