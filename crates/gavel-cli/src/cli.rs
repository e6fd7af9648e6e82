//! CLI argument definitions for GAVEL.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gavel",
    version,
    about = "GAVEL - course administration toolkit",
    long_about = "Download Canvas course data and inspect roster and consent exports.\n\n\
                  Canvas access is configured with CANVAS_BASE_URL and CANVAS_TOKEN,\n\
                  read from the environment or a .env file."
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
    /// Canvas course operations.
    #[command(subcommand)]
    CanvasCourse(CanvasCourseCommand),

    /// Enrollment roster operations.
    #[command(subcommand)]
    Roster(RosterCommand),

    /// Consent questionnaire operations.
    #[command(subcommand)]
    Consent(ConsentCommand),

    /// Show the active configuration.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
pub enum CanvasCourseCommand {
    /// Download course metadata and modules to a JSON file.
    Download(DownloadArgs),
}

#[derive(Parser)]
pub struct DownloadArgs {
    /// Canvas course numeric identifier.
    #[arg(long = "course-id", value_name = "ID", allow_negative_numbers = true)]
    pub course_id: i64,

    /// Directory where the JSON course data will be written.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum RosterCommand {
    /// Print the students of a roster export.
    Show(RosterShowArgs),
}

#[derive(Parser)]
pub struct RosterShowArgs {
    /// Roster CSV file.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(Subcommand)]
pub enum ConsentCommand {
    /// Print the attempts of a consent export with a summary.
    Show(ConsentShowArgs),
}

#[derive(Parser)]
pub struct ConsentShowArgs {
    /// Canvas quiz "student analysis" CSV file.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Only list each subject's latest attempt.
    #[arg(long = "latest-only")]
    pub latest_only: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print environment, version and Canvas settings.
    Show,
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
