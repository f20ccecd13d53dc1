//! Wire-format detection and the `var documenterSearchIndex = ...` wrapper.
//!
//! Generators ship the index as a JavaScript assignment so the search widget
//! can pull it in with a plain `<script>` tag. The bare JSON object is also
//! accepted. Detection is lenient about the variable name; emission always
//! uses the canonical one.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SidxError};

use super::SearchIndex;

/// Variable name used for canonical `js` emission.
pub const WRAPPER_NAME: &str = "documenterSearchIndex";

static WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*var\s+[A-Za-z_$][A-Za-z0-9_$]*\s*=\s*").expect("wrapper pattern")
});

/// On-disk flavor of an index snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFormat {
    /// `var documenterSearchIndex = {...}` with optional trailing `;`.
    Js,
    /// The bare JSON object.
    Json,
}

impl IndexFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexFormat::Js => "js",
            IndexFormat::Json => "json",
        }
    }
}

impl fmt::Display for IndexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn detect_format(raw: &str) -> IndexFormat {
    if WRAPPER.is_match(raw) {
        IndexFormat::Js
    } else {
        IndexFormat::Json
    }
}

/// Strip the assignment wrapper and trailing semicolon, returning the JSON body.
pub fn strip_wrapper(raw: &str) -> Result<&str> {
    let matched = WRAPPER
        .find(raw)
        .ok_or_else(|| SidxError::InvalidIndex("missing `var <name> =` wrapper".to_string()))?;
    let body = raw[matched.end()..].trim_end();
    let body = body.strip_suffix(';').unwrap_or(body);
    Ok(body.trim())
}

/// Parse either wire format into a typed index.
pub fn parse_str(raw: &str) -> Result<(SearchIndex, IndexFormat)> {
    let format = detect_format(raw);
    let body = match format {
        IndexFormat::Js => strip_wrapper(raw)?,
        IndexFormat::Json => raw.trim(),
    };
    let index: SearchIndex = serde_json::from_str(body)?;
    Ok((index, format))
}

/// Canonical `js` emission: compact body, canonical variable name, trailing
/// newline. Idempotent under `parse_str`.
pub fn to_js_string(index: &SearchIndex) -> Result<String> {
    Ok(format!(
        "var {WRAPPER_NAME} = {}\n",
        serde_json::to_string(index)?
    ))
}

/// Canonical bare-JSON emission with trailing newline.
pub fn to_json_string(index: &SearchIndex) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string(index)?))
}
