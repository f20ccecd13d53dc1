//! sidx completions - Generate shell completions

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(_ctx: &AppContext, args: &CompletionsArgs) -> Result<()> {
    run_without_context(args)
}

/// Completions need no config or context; main dispatches here directly.
pub fn run_without_context(args: &CompletionsArgs) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "sidx", &mut std::io::stdout());
    Ok(())
}
