//! # Core Module
//!
//! Stateless building blocks shared by every pipeline stage.
//!
//! - **Data model** ([`models`]) - primer sides, row kinds, histograms and the mismatch table
//! - **Scoring** ([`scoring`]) - the bucket weight table and the per-pair penalty score
//! - **File I/O** ([`io`]) - iPCRess output, targeton mappings and TSV serialization

pub mod io;
pub mod models;
pub mod scoring;
