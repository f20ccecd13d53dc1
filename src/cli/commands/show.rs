//! sidx show - Show records matching a location pattern

use std::path::PathBuf;

use clap::Args;
use regex::Regex;

use crate::app::AppContext;
use crate::cli::OutputFormat;
use crate::cli::output::{HumanLayout, emit_human, emit_jsonl, emit_robot, robot_ok};
use crate::error::{Result, SidxError};
use crate::index::{SearchIndex, SearchRecord};
use crate::utils::format::truncate;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Index file (search_index.js or bare JSON)
    pub index: PathBuf,

    /// Regex matched against record locations
    pub pattern: String,

    /// Maximum number of records to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let pattern = Regex::new(&args.pattern)
        .map_err(|err| SidxError::InvalidQuery(format!("bad location pattern: {err}")))?;

    let (index, _) = SearchIndex::load(&args.index)?;

    let mut matches: Vec<&SearchRecord> = index
        .docs
        .iter()
        .filter(|record| pattern.is_match(&record.location))
        .collect();
    if let Some(limit) = args.limit {
        matches.truncate(limit);
    }

    if matches.is_empty() {
        return Err(SidxError::NotFound(format!(
            "no records match {:?}",
            args.pattern
        )));
    }

    match ctx.output_format {
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            for record in &matches {
                layout.section(&record.location);
                layout.kv("page", &record.page);
                layout.kv("title", &record.title);
                layout.kv("category", record.category.as_str());
                if !record.text.is_empty() {
                    layout.kv("text", &truncate(&record.text, 300));
                }
                layout.blank();
            }
            layout.push_line(format!("{} record(s)", matches.len()));
            emit_human(layout);
            Ok(())
        }
        OutputFormat::Json => emit_robot(&robot_ok(serde_json::json!({
            "pattern": args.pattern,
            "count": matches.len(),
            "records": matches,
        }))),
        OutputFormat::Jsonl => {
            for record in &matches {
                emit_jsonl(record)?;
            }
            Ok(())
        }
        OutputFormat::Plain => {
            for record in &matches {
                println!(
                    "{}\t{}\t{}\t{}",
                    record.location, record.page, record.title, record.category
                );
            }
            Ok(())
        }
    }
}
