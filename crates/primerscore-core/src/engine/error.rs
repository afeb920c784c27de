use super::config::ConfigError;
use crate::core::io::groups::GroupMappingError;
use crate::core::io::ipcress::IpcressError;
use crate::core::io::tsv::TableWriteError;
use crate::core::models::ids::PairId;
use crate::core::scoring::ScoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Ipcress(#[from] IpcressError),

    #[error(transparent)]
    GroupMapping(#[from] GroupMappingError),

    #[error(
        "Mismatch number too low for ipcress file: '{tolerance}' (pair {pair_id} has a {observed}-mismatch hit)"
    )]
    MismatchRange {
        tolerance: u32,
        observed: u64,
        pair_id: PairId,
    },

    #[error("No data in ipcress file: '{source_name}'")]
    EmptyInput { source_name: String },

    #[error(transparent)]
    Scoring(#[from] ScoreError),

    #[error("Failed to write results: {0}")]
    Output(#[from] TableWriteError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal logic error: {0}")]
    Internal(String),
}
