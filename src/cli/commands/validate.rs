//! sidx validate - Validate index structure

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::OutputFormat;
use crate::cli::output::{HumanLayout, emit_human, emit_json, emit_jsonl};
use crate::error::{Result, SidxError};
use crate::index::validate::{Severity, validate_str};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Index file (search_index.js or bare JSON)
    pub index: PathBuf,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(ctx: &AppContext, args: &ValidateArgs) -> Result<()> {
    let raw = std::fs::read_to_string(&args.index).map_err(|err| SidxError::Parse {
        path: args.index.display().to_string(),
        message: err.to_string(),
    })?;
    let report = validate_str(&raw).map_err(|err| SidxError::Parse {
        path: args.index.display().to_string(),
        message: err.to_string(),
    })?;

    debug!(
        errors = report.errors(),
        warnings = report.warnings(),
        records = report.records,
        "validation complete"
    );

    let failed = !report.is_valid() || (args.strict && report.warnings() > 0);

    match ctx.output_format {
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title(&format!("Validate {}", args.index.display()));
            layout.kv("records", &report.records.to_string());
            layout.kv("pages", &report.pages.to_string());
            layout.kv("errors", &report.errors().to_string());
            layout.kv("warnings", &report.warnings().to_string());
            if !report.issues.is_empty() {
                layout.blank().section("Issues");
                for issue in &report.issues {
                    let severity = match issue.severity {
                        Severity::Error => style("error").red().to_string(),
                        Severity::Warning => style("warning").yellow().to_string(),
                        Severity::Info => style("info").dim().to_string(),
                    };
                    layout.bullet(&format!(
                        "{severity} [{}] {} at {}",
                        issue.rule, issue.message, issue.locus
                    ));
                }
            }
            layout.blank();
            if failed {
                layout.push_line(style("INVALID").red().bold().to_string());
            } else {
                layout.push_line(style("OK").green().bold().to_string());
            }
            emit_human(layout);
        }
        OutputFormat::Json => {
            emit_json(&serde_json::json!({
                "status": if failed { "invalid" } else { "ok" },
                "path": args.index.display().to_string(),
                "records": report.records,
                "pages": report.pages,
                "errors": report.errors(),
                "warnings": report.warnings(),
                "issues": &report.issues,
            }))?;
        }
        OutputFormat::Jsonl => {
            for issue in &report.issues {
                emit_jsonl(issue)?;
            }
        }
        OutputFormat::Plain => {
            for issue in &report.issues {
                println!(
                    "{}\t{}\t{}\t{}",
                    issue.severity, issue.rule, issue.locus, issue.message
                );
            }
        }
    }

    if failed {
        let mut problems = report.errors();
        if args.strict {
            problems += report.warnings();
        }
        return Err(SidxError::InvalidIndex(format!(
            "{problems} blocking issue(s) in {}",
            args.index.display()
        )));
    }
    Ok(())
}
