//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "feedclean",
    version,
    about = "Clean quote noise from the first column of tab-delimited product feeds",
    long_about = "Validate tab-delimited product feed files and strip spurious double \
                  quotes from their first column.\n\n\
                  `inspect` checks a candidate file and shows its GTIN, title, and line \
                  count. `clean` writes a cleaned copy named cleaned_<name> into the \
                  working directory and reports how many lines changed."
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

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a feed file and show its header metadata.
    Inspect(InspectArgs),

    /// Validate a feed file, then write a cleaned copy of its first column.
    Clean(CleanArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the tab-delimited feed file.
    #[arg(value_name = "FEED")]
    pub feed: PathBuf,

    /// Print the summary as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the tab-delimited feed file.
    #[arg(value_name = "FEED")]
    pub feed: PathBuf,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Run without the progress spinner.
    #[arg(long)]
    pub no_progress: bool,
}

/// Log level choices exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Log format choices exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
