//! sidx diff - Compare two index snapshots

use std::path::PathBuf;

use clap::Args;
use console::style;

use crate::app::AppContext;
use crate::cli::OutputFormat;
use crate::cli::output::{emit_jsonl, emit_robot, robot_ok};
use crate::error::Result;
use crate::index::diff::{DeltaStatus, diff};
use crate::index::SearchIndex;
use crate::utils::format::truncate;

#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Older snapshot
    pub old: PathBuf,

    /// Newer snapshot
    pub new: PathBuf,

    /// Show only the per-page rollup
    #[arg(long)]
    pub summary: bool,
}

pub fn run(ctx: &AppContext, args: &DiffArgs) -> Result<()> {
    let (old, _) = SearchIndex::load(&args.old)?;
    let (new, _) = SearchIndex::load(&args.new)?;
    let result = diff(&old, &new);

    match ctx.output_format {
        OutputFormat::Human => {
            if result.is_empty() {
                println!("Snapshots are identical ({} records)", result.unchanged);
                return Ok(());
            }

            for delta in &result.pages {
                if delta.status == DeltaStatus::Unchanged {
                    continue;
                }
                let marker = match delta.status {
                    DeltaStatus::Added => style("A").green().to_string(),
                    DeltaStatus::Removed => style("D").red().to_string(),
                    DeltaStatus::Modified => style("M").yellow().to_string(),
                    DeltaStatus::Unchanged => " ".to_string(),
                };
                println!(
                    "{marker} {:40} +{} -{}",
                    truncate(&delta.page, 38),
                    delta.added,
                    delta.removed
                );
            }

            if !args.summary {
                println!();
                for record in &result.added {
                    println!("{} {}", style("+").green(), record.location);
                }
                for record in &result.removed {
                    println!("{} {}", style("-").red(), record.location);
                }
            }

            println!();
            println!(
                "+{} -{} ={} record(s)",
                result.added.len(),
                result.removed.len(),
                result.unchanged
            );
            Ok(())
        }
        OutputFormat::Json => emit_robot(&robot_ok(serde_json::json!({
            "old": args.old.display().to_string(),
            "new": args.new.display().to_string(),
            "added": result.added.len(),
            "removed": result.removed.len(),
            "unchanged": result.unchanged,
            "pages": result.pages,
            "added_records": result.added,
            "removed_records": result.removed,
        }))),
        OutputFormat::Jsonl => {
            for delta in &result.pages {
                emit_jsonl(delta)?;
            }
            Ok(())
        }
        OutputFormat::Plain => {
            for record in &result.added {
                println!("+\t{}", record.location);
            }
            for record in &result.removed {
                println!("-\t{}", record.location);
            }
            Ok(())
        }
    }
}
