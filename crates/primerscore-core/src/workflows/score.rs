use crate::core::io::groups::GroupMapping;
use crate::core::io::ipcress::{IpcressError, IpcressRecords};
use crate::core::models::table::MismatchTable;
use crate::core::scoring::score_table;
use crate::engine::accumulator::accumulate;
use crate::engine::config::ScoringConfig;
use crate::engine::error::EngineError;
use crate::engine::grouping::merge_groups;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::ranking::rank_table;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing::{info, instrument};

/// Optional targeton mapping handed to [`run_from_readers`].
pub struct GroupSource<R> {
    pub reader: R,
    pub name: String,
}

/// Runs the full scoring pipeline on the files named in `config`.
#[instrument(skip_all, name = "scoring_workflow", fields(input = %config.ipcress_path.display()))]
pub fn run(
    config: &ScoringConfig,
    reporter: &ProgressReporter,
) -> Result<MismatchTable, EngineError> {
    let source_name = config.ipcress_path.to_string_lossy().to_string();
    let file = File::open(&config.ipcress_path).map_err(|source| IpcressError::Io {
        source_name: source_name.clone(),
        source,
    })?;

    let groups = match &config.group_mapping_path {
        Some(path) => {
            info!("Loading targeton mapping from {:?}", path);
            Some(GroupMapping::read_from_path(path)?)
        }
        None => None,
    };

    score_records(
        IpcressRecords::new(BufReader::new(file), source_name),
        config.mismatch_tolerance,
        groups.as_ref(),
        reporter,
    )
}

/// Runs the full scoring pipeline on already-open streams.
pub fn run_from_readers<R: BufRead, G: BufRead>(
    ipcress: R,
    ipcress_name: &str,
    mismatch_tolerance: u32,
    groups: Option<GroupSource<G>>,
    reporter: &ProgressReporter,
) -> Result<MismatchTable, EngineError> {
    let groups = groups
        .map(|g| GroupMapping::read_from(g.reader, &g.name))
        .transpose()?;

    score_records(
        IpcressRecords::new(ipcress, ipcress_name),
        mismatch_tolerance,
        groups.as_ref(),
        reporter,
    )
}

fn score_records<R: BufRead>(
    records: IpcressRecords<R>,
    mismatch_tolerance: u32,
    groups: Option<&GroupMapping>,
    reporter: &ProgressReporter,
) -> Result<MismatchTable, EngineError> {
    info!(
        "Tabulating mismatches from '{}' with a tolerance of {}.",
        records.source_name(),
        mismatch_tolerance
    );
    let mut table = reporter.phase("Reading iPCRess hits", || {
        accumulate(records, mismatch_tolerance)
    })?;
    reporter.report(Progress::Message(format!("{} rows tabulated", table.len())));

    if let Some(mapping) = groups {
        reporter.phase("Merging targetons", || -> Result<(), EngineError> {
            merge_groups(&mut table, mapping);
            Ok(())
        })?;
    }

    reporter.phase("Scoring primer pairs", || score_table(&mut table))?;
    reporter.phase("Ranking primer pairs", || rank_table(&mut table))?;

    info!("Scoring complete: {} rows ranked.", table.len());
    Ok(table)
}
