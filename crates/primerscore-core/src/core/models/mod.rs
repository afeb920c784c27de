//! Data structures describing parsed iPCRess hits and the aggregated mismatch table.
//!
//! A [`record::MismatchRecord`] is the ephemeral result of parsing one line. Records are
//! folded into [`histogram::Histogram`]s, one per [`table::RowKey`], and collected into a
//! [`table::MismatchTable`] which the scoring and ranking stages then annotate in place.

pub mod histogram;
pub mod ids;
pub mod record;
pub mod table;
