//! # primerscore
//!
//! Tabulates the amplification hits reported by an iPCRess (in-silico PCR) run and
//! ranks every primer pair by how strongly it cross-hits off-target sites.
//!
//! ## Architecture
//!
//! The library follows a three-layer split:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`MismatchTable`, row keys,
//!   histograms), the pure scoring math (`weight`, `score_histogram`) and the file
//!   formats (iPCRess output, targeton CSV, TSV tables).
//!
//! - **[`engine`]: The Pipeline Stages.** The mismatch accumulator, the targeton
//!   merger and the ranker, together with the run configuration, the aggregate error
//!   type and progress reporting.
//!
//! - **[`workflows`]: The Public API.** [`workflows::score`] drives the whole
//!   Parser → Accumulator → (Merger) → Scorer → Ranker pass and returns a table ready
//!   to be written.

pub mod core;
pub mod engine;
pub mod workflows;
