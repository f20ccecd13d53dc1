//! sidx stats - Corpus statistics

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::OutputFormat;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::index::SearchIndex;
use crate::index::stats::collect;
use crate::utils::format::format_size;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Index file (search_index.js or bare JSON)
    pub index: PathBuf,

    /// How many of the largest pages to report
    #[arg(long, default_value = "5")]
    pub top: usize,
}

pub fn run(ctx: &AppContext, args: &StatsArgs) -> Result<()> {
    let (index, format) = SearchIndex::load(&args.index)?;
    let stats = collect(&index, args.top);

    match ctx.output_format {
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title(&format!("Stats for {}", args.index.display()));
            layout.kv("format", format.as_str());
            layout.kv("records", &stats.records.to_string());
            layout.kv("pages", &stats.pages.to_string());
            layout.kv("locations", &stats.locations.to_string());
            layout.kv("text size", &format_size(stats.text_bytes));
            layout.kv("avg record", &format_size(stats.avg_text_bytes));
            layout.kv("empty text", &stats.empty_text.to_string());
            layout.blank().section("Categories");
            for (category, count) in &stats.categories {
                layout.kv(category, &count.to_string());
            }
            if !stats.largest_pages.is_empty() {
                layout.blank().section("Largest pages");
                for page in &stats.largest_pages {
                    layout.bullet(&format!(
                        "{} ({} records, {})",
                        page.page,
                        page.records,
                        format_size(page.text_bytes)
                    ));
                }
            }
            emit_human(layout);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Jsonl => emit_robot(&robot_ok(serde_json::json!({
            "path": args.index.display().to_string(),
            "format": format.as_str(),
            "stats": stats,
        }))),
        OutputFormat::Plain => {
            println!("records\t{}", stats.records);
            println!("pages\t{}", stats.pages);
            println!("locations\t{}", stats.locations);
            println!("text_bytes\t{}", stats.text_bytes);
            println!("empty_text\t{}", stats.empty_text);
            for (category, count) in &stats.categories {
                println!("category:{category}\t{count}");
            }
            Ok(())
        }
    }
}
