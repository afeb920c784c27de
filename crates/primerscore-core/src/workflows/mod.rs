//! # Workflows Module
//!
//! High-level entry points that run a complete scoring pass.
//!
//! - **Scoring workflow** ([`score`]) - reads an iPCRess file (and optionally a targeton
//!   mapping), accumulates mismatch histograms, scores and ranks every primer pair.

pub mod score;
