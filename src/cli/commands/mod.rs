//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod completions;
pub mod diff;
pub mod fmt;
pub mod list;
pub mod search;
pub mod show;
pub mod stats;
pub mod validate;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate index structure
    Validate(validate::ValidateArgs),

    /// Search index records
    Search(search::SearchArgs),

    /// List indexed pages
    List(list::ListArgs),

    /// Show records matching a location pattern
    Show(show::ShowArgs),

    /// Compare two index snapshots
    Diff(diff::DiffArgs),

    /// Corpus statistics
    Stats(stats::StatsArgs),

    /// Canonically re-emit an index
    Fmt(fmt::FmtArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Validate(args) => validate::run(ctx, args),
        Commands::Search(args) => search::run(ctx, args),
        Commands::List(args) => list::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Diff(args) => diff::run(ctx, args),
        Commands::Stats(args) => stats::run(ctx, args),
        Commands::Fmt(args) => fmt::run(ctx, args),
        Commands::Completions(args) => completions::run(ctx, args),
    }
}
