use crate::core::models::ids::PairId;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum GroupMappingError {
    #[error("I/O error while reading '{source_name}': {source}")]
    Io {
        source_name: String,
        source: io::Error,
    },
    #[error("Invalid targeton csv: '{source_name}' (line {line})")]
    InvalidGroupMapping { source_name: String, line: usize },
    #[error("Conflicting entries in targeton csv for {pair_id}: '{source_name}'")]
    ConflictingGroupEntry {
        pair_id: PairId,
        source_name: String,
    },
}

/// Primer pair → targeton lookup read from a two-column `pair_id,targeton` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMapping {
    groups: HashMap<PairId, String>,
}

impl GroupMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one entry. Repeating an identical entry is accepted; mapping a pair to a second,
    /// different group is not, and the rejected pair id is returned.
    pub fn insert(&mut self, pair_id: PairId, group: String) -> Result<(), PairId> {
        match self.groups.get(&pair_id) {
            Some(existing) if *existing != group => Err(pair_id),
            Some(_) => Ok(()),
            None => {
                self.groups.insert(pair_id, group);
                Ok(())
            }
        }
    }

    pub fn get(&self, pair_id: &PairId) -> Option<&str> {
        self.groups.get(pair_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn read_from(
        reader: impl BufRead,
        source_name: &str,
    ) -> Result<Self, GroupMappingError> {
        let mut mapping = Self::new();

        for (idx, line_res) in reader.lines().enumerate() {
            let line = line_res.map_err(|source| GroupMappingError::Io {
                source_name: source_name.to_string(),
                source,
            })?;
            let line = line.strip_suffix('\r').unwrap_or(&line);

            let (pair_id, group) =
                parse_entry(line).ok_or_else(|| GroupMappingError::InvalidGroupMapping {
                    source_name: source_name.to_string(),
                    line: idx + 1,
                })?;

            mapping
                .insert(PairId::new(pair_id), group.to_string())
                .map_err(|pair_id| GroupMappingError::ConflictingGroupEntry {
                    pair_id,
                    source_name: source_name.to_string(),
                })?;
        }

        debug!(
            entries = mapping.len(),
            source = source_name,
            "Loaded targeton mapping."
        );
        Ok(mapping)
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, GroupMappingError> {
        let path = path.as_ref();
        let source_name = path.to_string_lossy();
        let file = File::open(path).map_err(|source| GroupMappingError::Io {
            source_name: source_name.to_string(),
            source,
        })?;
        Self::read_from(BufReader::new(file), &source_name)
    }
}

fn parse_entry(line: &str) -> Option<(&str, &str)> {
    let (pair_id, group) = line.split_once(',')?;
    let is_token = |s: &str| !s.is_empty() && !s.contains(',') && !s.chars().any(char::is_whitespace);
    (is_token(pair_id) && is_token(group)).then_some((pair_id, group))
}
