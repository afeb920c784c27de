//! # Engine Module
//!
//! The stateful stages of a scoring run. Each stage takes the one [`MismatchTable`] the
//! run owns, transforms it and hands it on; no two stages touch it at the same time.
//!
//! - **Accumulation** ([`accumulator`]) - folds parsed iPCRess hits into per-row histograms
//! - **Targeton merge** ([`grouping`]) - re-keys rows under an external pair → targeton mapping
//! - **Ranking** ([`ranking`]) - orders rows by targeton, pair score, pair id and row kind
//! - **Configuration** ([`config`]) - what a run reads and with which tolerance
//! - **Progress** ([`progress`]) - optional callbacks for front-ends
//! - **Errors** ([`error`]) - the aggregate error every stage reports through
//!
//! [`MismatchTable`]: crate::core::models::table::MismatchTable

pub mod accumulator;
pub mod config;
pub mod error;
pub mod grouping;
pub mod progress;
pub mod ranking;
