//! Readers and writers for the files the scoring pipeline consumes and produces.
//!
//! - [`ipcress`] - the line parser and record stream for iPCRess output
//! - [`groups`] - the optional `pair_id,targeton` CSV mapping
//! - [`tsv`] - tab-separated serialization of a [`MismatchTable`](crate::core::models::table::MismatchTable)
//! - [`traits`] - the shared writer interface

pub mod groups;
pub mod ipcress;
pub mod traits;
pub mod tsv;
