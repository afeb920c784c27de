use crate::core::models::table::MismatchTable;
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Common interface for the formats a scored mismatch table can be written in.
pub trait TableFile {
    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Serializes `table` into `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    fn write_to(table: &MismatchTable, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes `table` to `path`, creating any missing parent directories first.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories or the file cannot be created, or writing fails.
    fn write_to_path<P: AsRef<Path>>(table: &MismatchTable, path: P) -> Result<(), Self::Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        Self::write_to(table, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
