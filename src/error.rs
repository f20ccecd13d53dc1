//! Crate-wide error type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SidxError>;

#[derive(Debug, Error)]
pub enum SidxError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config: {0}")]
    Config(String),

    /// Parse failure with the offending path attached.
    #[error("parse {path}: {message}")]
    Parse { path: String, message: String },

    /// The index decoded, but structural validation found errors.
    #[error("invalid index: {0}")]
    InvalidIndex(String),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("{0}")]
    NotFound(String),
}

impl SidxError {
    /// Stable machine-readable code for robot-mode error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            SidxError::Io(_) => "io",
            SidxError::Json(_) => "json",
            SidxError::Config(_) => "config",
            SidxError::Parse { .. } => "parse",
            SidxError::InvalidIndex(_) => "invalid_index",
            SidxError::InvalidQuery(_) => "invalid_query",
            SidxError::NotFound(_) => "not_found",
        }
    }
}
