use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::search::cache::CacheLayer;

pub struct AppContext {
    pub config_path: Option<PathBuf>,
    pub config: Config,
    pub cache: Arc<CacheLayer>,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;

        let cache = if config.cache.enabled {
            CacheLayer::new(config.cache.query_cache_size)
        } else {
            CacheLayer::disabled()
        };

        let output_format = resolve_format(cli, &config);

        Ok(Self {
            config_path: cli.config.clone().or_else(Config::global_path),
            config,
            cache: Arc::new(cache),
            output_format,
            verbosity: cli.verbose,
        })
    }
}

/// CLI flags win over the config file default.
fn resolve_format(cli: &crate::cli::Cli, config: &Config) -> OutputFormat {
    if cli.robot {
        return OutputFormat::Json;
    }
    if let Some(format) = cli.format {
        return format;
    }
    match config.output.format.as_str() {
        "json" => OutputFormat::Json,
        "jsonl" => OutputFormat::Jsonl,
        "plain" => OutputFormat::Plain,
        _ => OutputFormat::Human,
    }
}
