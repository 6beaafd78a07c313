//! CLI argument definitions for taskgen.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use taskgen_model::CollisionPolicy;

pub const DEFAULT_CSV_INPUT: &str = "tasks/tasks.csv";
pub const DEFAULT_YAML_INPUT: &str = "data/tasks/tasks.yaml";
pub const DEFAULT_OUTPUT_DIR: &str = "tasks";
pub const DEFAULT_STATE_FILE: &str = "data/state/completed_tasks.json";

#[derive(Parser)]
#[command(
    name = "taskgen",
    version,
    about = "Split a task list into one YAML file per category",
    long_about = "Split a task list into one YAML file per category.\n\n\
                  Each task gets a stable id built from its category initials and its\n\
                  position within the category, e.g. DA-001 for the first task in\n\
                  \"Data & Analytics\"."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate category files from a semicolon-delimited CSV.
    Csv(CsvArgs),

    /// Generate category files from a consolidated YAML task list.
    ///
    /// Tasks without a title get one derived from their description.
    Yaml(YamlArgs),

    /// Reset the completed-task state file to an empty list.
    ClearCompleted(ClearCompletedArgs),
}

#[derive(Args)]
pub struct CsvArgs {
    /// Path to the CSV source (header row, then category;description;complexity;time_estimate).
    #[arg(long = "input", value_name = "FILE", default_value = DEFAULT_CSV_INPUT)]
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct YamlArgs {
    /// Path to the YAML source (a list of task mappings).
    #[arg(long = "input", value_name = "FILE", default_value = DEFAULT_YAML_INPUT)]
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Directory that receives one YAML file per category.
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Derive ids and report without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// What to do when two categories map to the same file name.
    #[arg(long = "on-collision", value_enum, default_value = "overwrite")]
    pub on_collision: CollisionArg,
}

#[derive(Args)]
pub struct ClearCompletedArgs {
    /// Path to the completed-task state file.
    #[arg(long = "state-file", value_name = "FILE", default_value = DEFAULT_STATE_FILE)]
    pub state_file: PathBuf,
}

/// CLI collision policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum CollisionArg {
    /// Warn and let the last category win.
    Overwrite,
    /// Abort before writing anything.
    Reject,
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(value: CollisionArg) -> Self {
        match value {
            CollisionArg::Overwrite => CollisionPolicy::Overwrite,
            CollisionArg::Reject => CollisionPolicy::Reject,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn csv_defaults_match_fixed_layout() {
        let cli = Cli::try_parse_from(["taskgen", "csv"]).expect("parse");
        let Command::Csv(args) = cli.command else {
            panic!("expected csv command");
        };
        assert_eq!(args.input, PathBuf::from(DEFAULT_CSV_INPUT));
        assert_eq!(args.output.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(!args.output.dry_run);
        assert!(matches!(args.output.on_collision, CollisionArg::Overwrite));
    }

    #[test]
    fn yaml_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "taskgen",
            "yaml",
            "--input",
            "in.yaml",
            "--output-dir",
            "out",
            "--dry-run",
            "--on-collision",
            "reject",
        ])
        .expect("parse");
        let Command::Yaml(args) = cli.command else {
            panic!("expected yaml command");
        };
        assert_eq!(args.input, PathBuf::from("in.yaml"));
        assert_eq!(args.output.output_dir, PathBuf::from("out"));
        assert!(args.output.dry_run);
        assert_eq!(
            CollisionPolicy::from(args.output.on_collision),
            CollisionPolicy::Reject
        );
    }
}
