use crate::core::models::ids::{PairId, Side};
use crate::core::models::record::MismatchRecord;
use std::io::{self, BufRead};
use thiserror::Error;

/// Line iPCRess prints after its last result.
pub const END_MARKER: &str = "-- completed ipcress analysis";

const LINE_PREFIX: &str = "ipcress: ";
const FIELD_COUNT: usize = 10;

#[derive(Debug, Error)]
pub enum IpcressError {
    #[error("I/O error while reading '{source_name}': {source}")]
    Io {
        source_name: String,
        source: io::Error,
    },
    #[error("Invalid ipcress file: '{source_name}' (line {line}: {reason})")]
    MalformedRecord {
        source_name: String,
        line: usize,
        reason: LineError,
    },
}

/// Why a single line was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("line does not start with 'ipcress: '")]
    MissingPrefix,
    #[error("expected 10 fields after the prefix, found {found}")]
    FieldCount { found: usize },
    #[error("field {field} is empty or contains whitespace")]
    BadToken { field: &'static str },
    #[error("field {field} is not a non-negative integer (value: '{value}')")]
    InvalidNumber { field: &'static str, value: String },
    #[error("unknown primer side '{value}' in field {field}")]
    UnknownSide { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpcressLine {
    Hit(MismatchRecord),
    EndOfData,
}

/// Parses one line of iPCRess output, without its line terminator.
///
/// The expected shape is
/// `ipcress: <run-tag> <pair_id> <length> <side> <pos> <mm> <side> <pos> <mm> <description>`
/// with single spaces between fields. Anything that only partly matches is rejected.
pub fn parse_line(line: &str) -> Result<IpcressLine, LineError> {
    if line == END_MARKER {
        return Ok(IpcressLine::EndOfData);
    }
    let rest = line
        .strip_prefix(LINE_PREFIX)
        .ok_or(LineError::MissingPrefix)?;

    let fields: Vec<&str> = rest.split(' ').collect();
    if fields.len() != FIELD_COUNT {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    }

    let [
        run_tag,
        pair_id,
        length,
        side_5,
        pos_5,
        mismatch_5,
        side_3,
        pos_3,
        mismatch_3,
        description,
    ] = fields[..]
    else {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    };

    token(run_tag, "run-tag")?;
    token(description, "description")?;
    digits(length, "product-length")?;
    digits(pos_5, "position-5")?;
    digits(pos_3, "position-3")?;

    Ok(IpcressLine::Hit(MismatchRecord {
        pair_id: PairId::new(token(pair_id, "pair-id")?),
        side_5: side(side_5, "side-5")?,
        mismatch_5: mismatches(mismatch_5, "mismatch-5")?,
        side_3: side(side_3, "side-3")?,
        mismatch_3: mismatches(mismatch_3, "mismatch-3")?,
    }))
}

fn token<'a>(value: &'a str, field: &'static str) -> Result<&'a str, LineError> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(LineError::BadToken { field });
    }
    Ok(value)
}

fn digits<'a>(value: &'a str, field: &'static str) -> Result<&'a str, LineError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LineError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn mismatches(value: &str, field: &'static str) -> Result<u32, LineError> {
    digits(value, field)?
        .parse()
        .map_err(|_| LineError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn side(value: &str, field: &'static str) -> Result<Side, LineError> {
    value.parse().map_err(|_| LineError::UnknownSide {
        field,
        value: value.to_string(),
    })
}

/// Iterator over the hits of an iPCRess output stream.
///
/// Stops at the end marker; anything after it is never read. A malformed line ends the
/// iteration with an error naming the source and line number.
pub struct IpcressRecords<R> {
    lines: io::Lines<R>,
    source_name: String,
    line_num: usize,
    reached_end_marker: bool,
    finished: bool,
}

impl<R: BufRead> IpcressRecords<R> {
    pub fn new(reader: R, source_name: impl Into<String>) -> Self {
        Self {
            lines: reader.lines(),
            source_name: source_name.into(),
            line_num: 0,
            reached_end_marker: false,
            finished: false,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Whether the stream was terminated by [`END_MARKER`] rather than by EOF.
    pub fn reached_end_marker(&self) -> bool {
        self.reached_end_marker
    }
}

impl<R: BufRead> Iterator for IpcressRecords<R> {
    type Item = Result<MismatchRecord, IpcressError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(source) => {
                self.finished = true;
                return Some(Err(IpcressError::Io {
                    source_name: self.source_name.clone(),
                    source,
                }));
            }
        };
        self.line_num += 1;

        match parse_line(line.strip_suffix('\r').unwrap_or(&line)) {
            Ok(IpcressLine::Hit(record)) => Some(Ok(record)),
            Ok(IpcressLine::EndOfData) => {
                self.reached_end_marker = true;
                self.finished = true;
                None
            }
            Err(reason) => {
                self.finished = true;
                Some(Err(IpcressError::MalformedRecord {
                    source_name: self.source_name.clone(),
                    line: self.line_num,
                    reason,
                }))
            }
        }
    }
}
