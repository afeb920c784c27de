use crate::core::io::traits::TableFile;
use crate::core::models::table::MismatchTable;
use std::io::{self, Write};
use thiserror::Error;

pub const TARGETON_HEADER: &str = "Targeton";
pub const PAIR_HEADER: &str = "Primer pair";
pub const KIND_HEADER: &str = "A/B/Total";
pub const WGE_HEADER: &str = "WGE format";
pub const SCORE_HEADER: &str = "Score";

#[derive(Debug, Error)]
pub enum TableWriteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("TSV serialization error: {0}")]
    Csv(#[from] csv::Error),
}

/// Tab-separated table, one row per `(pair, kind)`.
///
/// Columns: the index levels, one column per mismatch bucket, the histogram again as a
/// single `WGE format` cell, and `Score` once the table has been scored.
pub struct TsvFile;

impl TsvFile {
    pub fn header(table: &MismatchTable) -> Vec<String> {
        let mut header = Vec::with_capacity(table.bucket_count() + 6);
        if table.is_grouped() {
            header.push(TARGETON_HEADER.to_string());
        }
        header.push(PAIR_HEADER.to_string());
        header.push(KIND_HEADER.to_string());
        header.extend((0..table.bucket_count()).map(|b| b.to_string()));
        header.push(WGE_HEADER.to_string());
        if table.is_scored() {
            header.push(SCORE_HEADER.to_string());
        }
        header
    }
}

impl TableFile for TsvFile {
    type Error = TableWriteError;

    fn write_to(table: &MismatchTable, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut out = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_writer(writer);

        out.write_record(Self::header(table))?;

        let mut record = Vec::with_capacity(table.bucket_count() + 6);
        for row in table.rows() {
            record.clear();
            if table.is_grouped() {
                record.push(row.key.group().unwrap_or_default().to_string());
            }
            record.push(row.key.pair_id().to_string());
            record.push(row.key.kind().to_string());
            record.extend(row.histogram.counts().iter().map(u64::to_string));
            record.push(row.histogram.to_wge_string());
            if table.is_scored() {
                record.push(row.score.map(|s| s.to_string()).unwrap_or_default());
            }
            out.write_record(&record)?;
        }

        out.flush()?;
        Ok(())
    }
}
