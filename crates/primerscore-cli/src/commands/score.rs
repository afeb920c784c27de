use crate::cli::ScoreArgs;
use crate::config::build_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use primerscore::{
    core::io::{traits::TableFile, tsv::TsvFile},
    engine::{error::EngineError, progress::ProgressReporter},
    workflows,
};
use tracing::info;

pub fn run(args: &ScoreArgs, show_progress: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_config(args)?;

    let progress_handler = CliProgressHandler::new(show_progress);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core scoring workflow...");
    let result = workflows::score::run(&app_config.core_config, &reporter);
    progress_handler.clear();
    let table = result?;

    info!(
        "Writing {} rows to {:?}",
        table.len(),
        &app_config.output_path
    );
    TsvFile::write_to_path(&table, &app_config.output_path).map_err(EngineError::from)?;

    println!(
        "Scoring complete! File saved to '{}'",
        app_config.output_path.display()
    );
    Ok(())
}
