use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Everything a path-based scoring run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    pub ipcress_path: PathBuf,
    /// The mismatch number iPCRess was run with (`M`); histograms span `0..=2M`.
    pub mismatch_tolerance: u32,
    pub group_mapping_path: Option<PathBuf>,
}

#[derive(Default)]
pub struct ScoringConfigBuilder {
    ipcress_path: Option<PathBuf>,
    mismatch_tolerance: Option<u32>,
    group_mapping_path: Option<PathBuf>,
}

impl ScoringConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ipcress_path(mut self, path: PathBuf) -> Self {
        self.ipcress_path = Some(path);
        self
    }
    pub fn mismatch_tolerance(mut self, tolerance: u32) -> Self {
        self.mismatch_tolerance = Some(tolerance);
        self
    }
    pub fn group_mapping_path(mut self, path: Option<PathBuf>) -> Self {
        self.group_mapping_path = path;
        self
    }

    pub fn build(self) -> Result<ScoringConfig, ConfigError> {
        Ok(ScoringConfig {
            ipcress_path: self
                .ipcress_path
                .ok_or(ConfigError::MissingParameter("ipcress_path"))?,
            mismatch_tolerance: self
                .mismatch_tolerance
                .ok_or(ConfigError::MissingParameter("mismatch_tolerance"))?,
            group_mapping_path: self.group_mapping_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_succeeds_with_required_fields() {
        let config = ScoringConfigBuilder::new()
            .ipcress_path(PathBuf::from("run.txt"))
            .mismatch_tolerance(4)
            .build()
            .unwrap();
        assert_eq!(config.ipcress_path, PathBuf::from("run.txt"));
        assert_eq!(config.mismatch_tolerance, 4);
        assert_eq!(config.group_mapping_path, None);
    }

    #[test]
    fn builder_reports_missing_tolerance() {
        let result = ScoringConfigBuilder::new()
            .ipcress_path(PathBuf::from("run.txt"))
            .group_mapping_path(Some(PathBuf::from("targetons.csv")))
            .build();
        assert_eq!(
            result,
            Err(ConfigError::MissingParameter("mismatch_tolerance"))
        );
    }

    #[test]
    fn builder_reports_missing_input() {
        let result = ScoringConfigBuilder::new().mismatch_tolerance(1).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("ipcress_path")));
    }
}
