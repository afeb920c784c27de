use crate::utils::validation::{new_file_path, non_empty_file, non_negative_mismatch};
use clap::{Args, Parser};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const AFTER_HELP: &str =
    "Example: primerscore -i ipcress_output.txt -m 4 -o scored_primers.tsv";

#[derive(Parser, Debug)]
#[command(
    name = "primerscore",
    author,
    version,
    about = "Score primer pairs by their off-target mismatch profile in Exonerate iPCRess output.",
    help_template = HELP_TEMPLATE,
    after_help = AFTER_HELP,
)]
pub struct Cli {
    #[command(flatten)]
    pub score: ScoreArgs,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress display
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// File containing output from Exonerate iPCRess.
    #[arg(short, long, required = true, value_name = "PATH", value_parser = non_empty_file)]
    pub input: PathBuf,

    /// Mismatch number used for the iPCRess run.
    /// Required here unless the config file sets `mismatches`.
    #[arg(
        short,
        long,
        value_name = "N",
        allow_negative_numbers = true,
        value_parser = non_negative_mismatch
    )]
    pub mismatches: Option<u32>,

    /// Path for the output TSV file. Must not already exist.
    #[arg(short, long, required = true, value_name = "PATH", value_parser = new_file_path)]
    pub output: PathBuf,

    /// CSV of primer pairs and their targetons; adds a targeton column to the output.
    #[arg(short, long, value_name = "PATH", value_parser = non_empty_file)]
    pub targeton_csv: Option<PathBuf>,

    /// Optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH", value_parser = non_empty_file)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_full_argument_set() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ipcress.txt");
        let targetons = dir.path().join("targetons.csv");
        fs::write(&input, "-- completed ipcress analysis\n").unwrap();
        fs::write(&targetons, "pair_1,targeton_1\n").unwrap();
        let output = dir.path().join("out.tsv");

        let cli = Cli::try_parse_from([
            "primerscore",
            "-i",
            input.to_str().unwrap(),
            "-m",
            "4",
            "-o",
            output.to_str().unwrap(),
            "--targeton-csv",
            targetons.to_str().unwrap(),
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.score.input, input);
        assert_eq!(cli.score.mismatches, Some(4));
        assert_eq!(cli.score.output, output);
        assert_eq!(cli.score.targeton_csv, Some(targetons));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn negative_mismatch_number_is_rejected() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ipcress.txt");
        fs::write(&input, "data").unwrap();

        let err = Cli::try_parse_from([
            "primerscore",
            "-i",
            input.to_str().unwrap(),
            "-m",
            "-1",
            "-o",
            dir.path().join("out.tsv").to_str().unwrap(),
        ])
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Mismatch number cannot be negative"));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let err = Cli::try_parse_from(["primerscore", "-q", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }
}
