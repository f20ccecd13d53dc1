//! In-memory model of a generator-emitted search index.
//!
//! The artifact has one shape: a top-level mapping with a single `docs` key
//! holding an ordered sequence of flat string records. Records are generated
//! wholesale at documentation-build time and never mutated; everything here
//! treats a loaded index as read-only.

pub mod diff;
pub mod parser;
pub mod record;
pub mod stats;
pub mod validate;

use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SidxError};

pub use parser::IndexFormat;
pub use record::{Category, SearchRecord};

/// A loaded search index: exactly one `docs` key, order-preserving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchIndex {
    pub docs: Vec<SearchRecord>,
}

impl SearchIndex {
    /// Read and parse an index file, auto-detecting the wire format.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, IndexFormat)> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| SidxError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        let (index, format) = parser::parse_str(&raw).map_err(|err| SidxError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        debug!(
            records = index.docs.len(),
            format = %format,
            path = %path.display(),
            "loaded search index"
        );
        Ok((index, format))
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Distinct page names in first-seen order.
    pub fn pages(&self) -> Vec<&str> {
        self.docs
            .iter()
            .map(|record| record.page.as_str())
            .unique()
            .collect()
    }

    pub fn records_for_page<'a>(&'a self, page: &'a str) -> impl Iterator<Item = &'a SearchRecord> {
        self.docs.iter().filter(move |record| record.page == page)
    }

    pub fn to_js_string(&self) -> Result<String> {
        parser::to_js_string(self)
    }

    pub fn to_json_string(&self) -> Result<String> {
        parser::to_json_string(self)
    }
}
