use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SidxError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration: defaults, then the discovered (or explicit) config
    /// file as a patch, then `SIDX_*` environment overrides.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("SIDX_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Default config file location under the user config directory.
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sidx/config.toml"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match Self::global_path() {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| SidxError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| SidxError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    pub fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.cache {
            self.cache.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if env_bool("SIDX_CACHE_DISABLED").unwrap_or(false) {
            self.cache.enabled = false;
        }
        if let Some(value) = env_usize("SIDX_CACHE_SIZE")? {
            self.cache.query_cache_size = value;
        }

        if let Some(value) = env_usize("SIDX_SEARCH_LIMIT")? {
            self.search.limit = value;
        }
        if let Some(value) = env_f32("SIDX_SEARCH_TITLE_BOOST")? {
            self.search.title_boost = value;
        }
        if let Some(value) = env_bool("SIDX_SEARCH_STOPWORDS") {
            self.search.stopwords = value;
        }
        if let Some(value) = env_usize("SIDX_SEARCH_MIN_TOKEN_LEN")? {
            self.search.min_token_len = value;
        }
        if let Some(value) = env_usize("SIDX_SEARCH_SNIPPET_WIDTH")? {
            self.search.snippet_width = value;
        }

        if let Some(value) = env_string("SIDX_OUTPUT_FORMAT") {
            self.output.format = value;
        }

        Ok(())
    }
}

/// Partial config as read from a TOML file; every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigPatch {
    pub search: Option<SearchConfigPatch>,
    pub cache: Option<CacheConfigPatch>,
    pub output: Option<OutputConfigPatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Default result limit when the command does not pass one.
    pub limit: usize,
    /// Multiplier applied to title/page term matches.
    pub title_boost: f32,
    pub bm25_k1: f32,
    pub bm25_b: f32,
    /// Reciprocal rank fusion constant.
    pub rrf_k: f32,
    pub min_token_len: usize,
    pub stopwords: bool,
    /// Snippet width in characters.
    pub snippet_width: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            title_boost: 2.0,
            bm25_k1: 1.2,
            bm25_b: 0.75,
            rrf_k: 60.0,
            min_token_len: 2,
            stopwords: true,
            snippet_width: 160,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfigPatch {
    pub limit: Option<usize>,
    pub title_boost: Option<f32>,
    pub bm25_k1: Option<f32>,
    pub bm25_b: Option<f32>,
    pub rrf_k: Option<f32>,
    pub min_token_len: Option<usize>,
    pub stopwords: Option<bool>,
    pub snippet_width: Option<usize>,
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchConfigPatch) {
        if let Some(value) = patch.limit {
            self.limit = value;
        }
        if let Some(value) = patch.title_boost {
            self.title_boost = value;
        }
        if let Some(value) = patch.bm25_k1 {
            self.bm25_k1 = value;
        }
        if let Some(value) = patch.bm25_b {
            self.bm25_b = value;
        }
        if let Some(value) = patch.rrf_k {
            self.rrf_k = value;
        }
        if let Some(value) = patch.min_token_len {
            self.min_token_len = value;
        }
        if let Some(value) = patch.stopwords {
            self.stopwords = value;
        }
        if let Some(value) = patch.snippet_width {
            self.snippet_width = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    pub query_cache_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            query_cache_size: 128,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheConfigPatch {
    pub enabled: Option<bool>,
    pub query_cache_size: Option<usize>,
}

impl CacheConfig {
    fn merge(&mut self, patch: CacheConfigPatch) {
        if let Some(value) = patch.enabled {
            self.enabled = value;
        }
        if let Some(value) = patch.query_cache_size {
            self.query_cache_size = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format: human, json, jsonl, plain.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfigPatch {
    pub format: Option<String>,
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputConfigPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_bool(name: &str) -> Option<bool> {
    env_string(name).map(|v| matches!(v.as_str(), "1" | "true" | "yes" | "on"))
}

fn env_usize(name: &str) -> Result<Option<usize>> {
    match env_string(name) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| SidxError::Config(format!("{name} must be an integer, got {raw:?}"))),
    }
}

fn env_f32(name: &str) -> Result<Option<f32>> {
    match env_string(name) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| SidxError::Config(format!("{name} must be a number, got {raw:?}"))),
    }
}
