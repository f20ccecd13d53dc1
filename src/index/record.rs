//! Search index records.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Record category emitted by the generator.
///
/// Generators emit `page` for body paragraphs and `section` for heading
/// anchors. Unknown values are preserved verbatim so newer generator output
/// still loads; validation flags them instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Page,
    Section,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Page => "page",
            Category::Section => "section",
            Category::Other(value) => value,
        }
    }

    /// Whether the value belongs to the known closed set.
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "page" => Category::Page,
            "section" => Category::Section,
            _ => Category::Other(value),
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the `docs` sequence. All five fields are strings on the wire
/// and may be empty; nothing enforces uniqueness across records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchRecord {
    /// Relative URL of the documentation anchor, e.g. `examples/npg/#Overview-1`.
    pub location: String,
    /// Human-readable page name.
    pub page: String,
    /// Section title.
    pub title: String,
    /// Indexed prose snippet. Empty for heading-only records.
    pub text: String,
    pub category: Category,
}

impl SearchRecord {
    /// Location up to the `#` fragment separator.
    pub fn path(&self) -> &str {
        match self.location.split_once('#') {
            Some((path, _)) => path,
            None => &self.location,
        }
    }

    /// Fragment after `#`, if present and non-empty.
    pub fn anchor(&self) -> Option<&str> {
        self.location
            .split_once('#')
            .map(|(_, anchor)| anchor)
            .filter(|anchor| !anchor.is_empty())
    }

    /// Content fingerprint over all five fields. Used as record identity when
    /// comparing snapshots; duplicate records hash identically.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for field in [
            self.location.as_str(),
            self.page.as_str(),
            self.title.as_str(),
            self.text.as_str(),
            self.category.as_str(),
        ] {
            hasher.update(field.as_bytes());
            hasher.update([0u8]);
        }
        hex::encode(hasher.finalize())
    }
}
