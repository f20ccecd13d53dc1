//! sidx search - Search index records

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::OutputFormat;
use crate::cli::output::{emit_jsonl, emit_robot, robot_ok};
use crate::error::Result;
use crate::index::{Category, SearchIndex};
use crate::search::cache::CacheLayer;
use crate::search::{SearchEngine, SearchHit, SearchOptions};
use crate::utils::format::truncate;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Index file (search_index.js or bare JSON)
    pub index: PathBuf,

    /// Query: bare terms are keyword-matched, "quoted strings" are exact phrases
    pub query: String,

    /// Maximum number of results
    #[arg(long, short)]
    pub limit: Option<usize>,

    /// Filter by category (page, section, ...)
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by page name (case-insensitive)
    #[arg(long)]
    pub page: Option<String>,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let (index, _) = SearchIndex::load(&args.index)?;
    let engine = SearchEngine::build(index, &ctx.config.search);

    let options = SearchOptions {
        limit: args.limit,
        category: args.category.clone().map(Category::from),
        page: args.page.clone(),
    };

    let limit = args.limit.unwrap_or(ctx.config.search.limit);
    let key = CacheLayer::key(
        &args.query,
        limit,
        args.category.as_deref(),
        args.page.as_deref(),
    );
    let hits = match ctx.cache.get(key) {
        Some(hits) => {
            debug!(query = %args.query, "query cache hit");
            hits
        }
        None => {
            let hits = engine.search(&args.query, &options);
            ctx.cache.put(key, &hits);
            hits
        }
    };

    display_hits(ctx, args, &hits)
}

fn display_hits(ctx: &AppContext, args: &SearchArgs, hits: &[SearchHit]) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Human => {
            if hits.is_empty() {
                println!("No matches for {:?}", args.query);
                return Ok(());
            }
            for (rank, hit) in hits.iter().enumerate() {
                println!(
                    "{:>2}. {}  {}",
                    rank + 1,
                    style(&hit.title).bold(),
                    style(format!("({})", hit.page)).dim()
                );
                println!(
                    "    {}  {}",
                    style(&hit.location).cyan(),
                    style(format!("[{} {:.3}]", hit.category, hit.score)).dim()
                );
                if !hit.snippet.is_empty() {
                    println!("    {}", truncate(&hit.snippet, 200));
                }
                println!();
            }
            println!("{} result(s)", hits.len());
            Ok(())
        }
        OutputFormat::Json => emit_robot(&robot_ok(serde_json::json!({
            "query": args.query,
            "count": hits.len(),
            "hits": hits,
        }))),
        OutputFormat::Jsonl => {
            for hit in hits {
                emit_jsonl(hit)?;
            }
            Ok(())
        }
        OutputFormat::Plain => {
            for hit in hits {
                println!(
                    "{}\t{}\t{}\t{:.4}",
                    hit.location, hit.page, hit.title, hit.score
                );
            }
            Ok(())
        }
    }
}
