use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::ScoreArgs;
use crate::error::{CliError, Result};
use crate::utils::validation::non_empty_file;
use primerscore::engine::config::ScoringConfigBuilder;
use std::path::PathBuf;
use tracing::debug;

/// Merges command-line arguments over the optional config file.
pub fn build_config(args: &ScoreArgs) -> Result<AppConfig> {
    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let mismatches = args.mismatches.or(file_config.mismatches).ok_or_else(|| {
        CliError::Config(
            "A value for 'mismatches' is required either in the config file or via CLI argument."
                .to_string(),
        )
    })?;

    let targeton_csv = match (&args.targeton_csv, file_config.targeton_csv) {
        (Some(cli_path), _) => Some(cli_path.clone()),
        (None, Some(file_path)) => Some(validate_file_path(file_path)?),
        (None, None) => None,
    };

    debug!(
        mismatches,
        targeton_csv = ?targeton_csv,
        "Resolved scoring configuration."
    );

    let core_config = ScoringConfigBuilder::new()
        .ipcress_path(args.input.clone())
        .mismatch_tolerance(mismatches)
        .group_mapping_path(targeton_csv)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        output_path: args.output.clone(),
        core_config,
    })
}

fn validate_file_path(path: PathBuf) -> Result<PathBuf> {
    non_empty_file(&path.to_string_lossy()).map_err(CliError::Argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn base_args(dir: &TempDir) -> ScoreArgs {
        ScoreArgs {
            input: dir.path().join("ipcress.txt"),
            mismatches: None,
            output: dir.path().join("out.tsv"),
            targeton_csv: None,
            config: None,
        }
    }

    #[test]
    fn cli_values_alone_are_enough() {
        let dir = tempdir().unwrap();
        let mut args = base_args(&dir);
        args.mismatches = Some(4);

        let app = build_config(&args).unwrap();
        assert_eq!(app.output_path, dir.path().join("out.tsv"));
        assert_eq!(app.core_config.ipcress_path, dir.path().join("ipcress.txt"));
        assert_eq!(app.core_config.mismatch_tolerance, 4);
        assert_eq!(app.core_config.group_mapping_path, None);
    }

    #[test]
    fn missing_mismatches_is_a_config_error() {
        let dir = tempdir().unwrap();
        let result = build_config(&base_args(&dir));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("mismatches")));
    }

    #[test]
    fn file_values_fill_gaps_and_cli_overrides() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("primerscore.toml");
        fs::write(&cfg_path, "mismatches = 2\ntargeton-csv = \"targetons.csv\"\n").unwrap();
        fs::write(dir.path().join("targetons.csv"), "pair_1,targeton_1\n").unwrap();

        let mut args = base_args(&dir);
        args.config = Some(cfg_path.clone());
        let app = build_config(&args).unwrap();
        assert_eq!(app.core_config.mismatch_tolerance, 2);
        assert_eq!(
            app.core_config.group_mapping_path,
            Some(dir.path().join("targetons.csv"))
        );

        args.mismatches = Some(5);
        let app = build_config(&args).unwrap();
        assert_eq!(app.core_config.mismatch_tolerance, 5);
    }

    #[test]
    fn targeton_csv_from_file_must_exist() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("primerscore.toml");
        fs::write(&cfg_path, "mismatches = 2\ntargeton-csv = \"absent.csv\"\n").unwrap();

        let mut args = base_args(&dir);
        args.config = Some(cfg_path);
        let result = build_config(&args);
        assert!(
            matches!(result, Err(CliError::Argument(msg)) if msg.starts_with("File does not exist"))
        );
    }
}
