//! Command-line surface.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub use commands::Commands;

#[derive(Parser, Debug)]
#[command(
    name = "sidx",
    version,
    about = "Inspect, validate, query, and diff documentation search indexes",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Machine-readable JSON output (shorthand for --format json)
    #[arg(long, global = true)]
    pub robot: bool,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a config file (overrides discovery)
    #[arg(long, global = true, env = "SIDX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Human,
    Json,
    Jsonl,
    Plain,
}

impl Cli {
    /// Format as resolved from flags alone; the config default is applied
    /// later in `AppContext`.
    pub fn output_format(&self) -> OutputFormat {
        if self.robot {
            return OutputFormat::Json;
        }
        self.format.unwrap_or(OutputFormat::Human)
    }
}
