//! sidx list - List indexed pages

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::OutputFormat;
use crate::cli::output::{emit_jsonl, emit_robot, robot_ok};
use crate::error::Result;
use crate::index::{Category, SearchIndex};
use crate::utils::format::truncate;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Index file (search_index.js or bare JSON)
    pub index: PathBuf,

    /// Sort by: name, records
    #[arg(long, default_value = "name")]
    pub sort: String,

    /// Maximum number of pages to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
struct PageEntry {
    page: String,
    records: usize,
    sections: usize,
    location: String,
}

pub fn run(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let (index, _) = SearchIndex::load(&args.index)?;

    let mut entries: Vec<PageEntry> = index
        .pages()
        .into_iter()
        .map(|page| {
            let records: Vec<_> = index.records_for_page(page).collect();
            PageEntry {
                page: page.to_string(),
                records: records.len(),
                sections: records
                    .iter()
                    .filter(|r| r.category == Category::Section)
                    .count(),
                location: records
                    .first()
                    .map(|r| r.path().to_string())
                    .unwrap_or_default(),
            }
        })
        .collect();

    match args.sort.as_str() {
        "records" => entries.sort_by(|a, b| b.records.cmp(&a.records).then(a.page.cmp(&b.page))),
        _ => entries.sort_by(|a, b| a.page.cmp(&b.page)),
    }

    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    match ctx.output_format {
        OutputFormat::Human => {
            if entries.is_empty() {
                println!("No pages indexed");
                return Ok(());
            }
            println!("{:40} {:>8} {:>9}  {}", "PAGE", "RECORDS", "SECTIONS", "LOCATION");
            println!("{}", "─".repeat(84));
            for entry in &entries {
                println!(
                    "{:40} {:>8} {:>9}  {}",
                    truncate(&entry.page, 38),
                    entry.records,
                    entry.sections,
                    entry.location
                );
            }
            println!();
            println!("Total: {} page(s)", entries.len());
            Ok(())
        }
        OutputFormat::Json => emit_robot(&robot_ok(serde_json::json!({
            "count": entries.len(),
            "pages": entries,
        }))),
        OutputFormat::Jsonl => {
            for entry in &entries {
                emit_jsonl(entry)?;
            }
            Ok(())
        }
        OutputFormat::Plain => {
            for entry in &entries {
                println!(
                    "{}\t{}\t{}\t{}",
                    entry.page, entry.records, entry.sections, entry.location
                );
            }
            Ok(())
        }
    }
}
