//! sidx fmt - Canonically re-emit an index
//!
//! Emission is idempotent: formatting an already-canonical snapshot produces
//! byte-identical output.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::debug;

use crate::app::AppContext;
use crate::cli::OutputFormat;
use crate::cli::output::{emit_robot, robot_ok};
use crate::error::Result;
use crate::index::{IndexFormat, SearchIndex};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "lowercase")]
pub enum TargetFormat {
    /// `var documenterSearchIndex = {...}`
    Js,
    /// Bare JSON object
    Json,
}

#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Index file (search_index.js or bare JSON)
    pub index: PathBuf,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Target wire format (defaults to the detected input format)
    #[arg(long = "to", value_enum)]
    pub to: Option<TargetFormat>,
}

pub fn run(ctx: &AppContext, args: &FmtArgs) -> Result<()> {
    let (index, detected) = SearchIndex::load(&args.index)?;

    let target = args.to.unwrap_or(match detected {
        IndexFormat::Js => TargetFormat::Js,
        IndexFormat::Json => TargetFormat::Json,
    });
    let emitted = match target {
        TargetFormat::Js => index.to_js_string()?,
        TargetFormat::Json => index.to_json_string()?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &emitted)?;
            debug!(path = %path.display(), bytes = emitted.len(), "wrote formatted index");
            match ctx.output_format {
                OutputFormat::Json | OutputFormat::Jsonl => {
                    emit_robot(&robot_ok(serde_json::json!({
                        "path": path.display().to_string(),
                        "format": match target {
                            TargetFormat::Js => "js",
                            TargetFormat::Json => "json",
                        },
                        "records": index.len(),
                        "bytes": emitted.len(),
                    })))?;
                }
                _ => println!(
                    "Wrote {} record(s) to {}",
                    index.len(),
                    path.display()
                ),
            }
            Ok(())
        }
        None => {
            // fmt acts as a filter: raw emission regardless of output mode.
            print!("{emitted}");
            Ok(())
        }
    }
}
