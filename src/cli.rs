use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Timetable workbook to iCalendar synchronizer.
#[derive(Parser)]
#[command(
    name = "schedsync",
    version,
    about = "Extract one group's lessons from a timetable workbook and publish an iCalendar feed"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Fetch, extract, write the calendar and notify on change.
    Run(RunArgs),
    /// Print the extracted lessons as JSON without writing anything else.
    Extract(ExtractArgs),
}

/// Workbook source overrides shared by both subcommands.
#[derive(clap::Args)]
pub struct SourceArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "schedsync.toml")]
    pub config: PathBuf,

    /// Read this local workbook instead of the configured source.
    #[arg(short, long, conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// Download the workbook from this URL instead of the configured source.
    #[arg(short, long)]
    pub url: Option<String>,

    /// Override the group label from config.
    #[arg(short, long)]
    pub group: Option<String>,
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Override output ICS path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log notifications instead of delivering them.
    #[arg(long)]
    pub no_notify: bool,
}

/// Arguments for the `extract` subcommand.
#[derive(clap::Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
