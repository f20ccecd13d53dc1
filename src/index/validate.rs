//! Structural validation of raw index snapshots.
//!
//! Runs over the decoded `serde_json::Value` rather than the typed model so a
//! malformed shape comes back as a structured report instead of a bare
//! decoder error. Only outright malformed JSON (or a broken wrapper) fails
//! the whole pass.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

use super::parser::{self, IndexFormat};
use super::SearchIndex;

/// Category values the generator is known to emit.
pub const KNOWN_CATEGORIES: &[&str] = &["page", "section"];

/// The five wire fields every record must carry.
pub const RECORD_FIELDS: &[&str] = &["location", "page", "title", "text", "category"];

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    /// Should fix, but the index still loads.
    Warning,
    /// Structural break; consumers may misbehave.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Rule id, e.g. `field-missing`.
    pub rule: String,
    pub severity: Severity,
    /// JSON-path-like locus, e.g. `docs[17].category`.
    pub locus: String,
    pub message: String,
}

impl Issue {
    pub fn error(rule: &str, locus: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Error, locus, message)
    }

    pub fn warning(rule: &str, locus: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Warning, locus, message)
    }

    pub fn info(rule: &str, locus: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Info, locus, message)
    }

    fn new(rule: &str, severity: Severity, locus: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            severity,
            locus: locus.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} at {}",
            self.severity, self.rule, self.message, self.locus
        )
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
    pub records: usize,
    pub pages: usize,
}

impl ValidationReport {
    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn is_valid(&self) -> bool {
        self.errors() == 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}

/// Validate a raw snapshot in either wire format.
pub fn validate_str(raw: &str) -> Result<ValidationReport> {
    let body = match parser::detect_format(raw) {
        IndexFormat::Js => parser::strip_wrapper(raw)?,
        IndexFormat::Json => raw.trim(),
    };
    let value: Value = serde_json::from_str(body)?;
    Ok(validate_value(&value))
}

pub fn validate_value(value: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(top) = value.as_object() else {
        report.issues.push(Issue::error(
            "top-level-object",
            "$",
            "top level must be an object",
        ));
        return report;
    };

    for key in top.keys().filter(|key| key.as_str() != "docs") {
        report.issues.push(Issue::error(
            "extra-top-level-key",
            key.clone(),
            format!("unexpected top-level key {key:?}; only \"docs\" is allowed"),
        ));
    }

    let Some(docs) = top.get("docs") else {
        report
            .issues
            .push(Issue::error("docs-missing", "$", "missing \"docs\" key"));
        return report;
    };

    let Some(elements) = docs.as_array() else {
        report.issues.push(Issue::error(
            "docs-array",
            "docs",
            "\"docs\" must be a sequence",
        ));
        return report;
    };

    report.records = elements.len();

    let mut pages: Vec<&str> = Vec::new();
    let mut seen: HashMap<String, Vec<usize>> = HashMap::new();

    for (i, element) in elements.iter().enumerate() {
        let base = format!("docs[{i}]");

        let Some(fields) = element.as_object() else {
            report.issues.push(Issue::error(
                "record-object",
                base,
                "record must be an object",
            ));
            continue;
        };

        for field in RECORD_FIELDS {
            match fields.get(*field) {
                None => report.issues.push(Issue::error(
                    "field-missing",
                    format!("{base}.{field}"),
                    format!("missing field {field:?}"),
                )),
                Some(value) if !value.is_string() => report.issues.push(Issue::error(
                    "field-type",
                    format!("{base}.{field}"),
                    format!("field {field:?} must be a string"),
                )),
                Some(_) => {}
            }
        }

        for key in fields.keys() {
            if !RECORD_FIELDS.contains(&key.as_str()) {
                report.issues.push(Issue::error(
                    "field-unknown",
                    format!("{base}.{key}"),
                    format!("unknown field {key:?}"),
                ));
            }
        }

        if let Some(category) = fields.get("category").and_then(Value::as_str) {
            if !KNOWN_CATEGORIES.contains(&category) {
                report.issues.push(Issue::warning(
                    "category-unknown",
                    format!("{base}.category"),
                    format!("category {category:?} is outside the known set {KNOWN_CATEGORIES:?}"),
                ));
            }
        }

        if let Some(location) = fields.get("location").and_then(Value::as_str) {
            if location.is_empty() {
                report.issues.push(Issue::warning(
                    "location-empty",
                    format!("{base}.location"),
                    "empty location",
                ));
            } else if !location.contains('#') {
                report.issues.push(Issue::warning(
                    "location-fragment",
                    format!("{base}.location"),
                    "location has no `#` fragment",
                ));
            }
        }

        if let Some(text) = fields.get("text").and_then(Value::as_str) {
            if text.is_empty() {
                report.issues.push(Issue::info(
                    "text-empty",
                    format!("{base}.text"),
                    "empty text (heading-only record)",
                ));
            }
        }

        if let Some(page) = fields.get("page").and_then(Value::as_str) {
            if !pages.contains(&page) {
                pages.push(page);
            }
        }

        if let Ok(key) = serde_json::to_string(element) {
            seen.entry(key).or_default().push(i);
        }
    }

    report.pages = pages.len();

    let mut duplicates: Vec<&Vec<usize>> = seen.values().filter(|idxs| idxs.len() > 1).collect();
    duplicates.sort_by_key(|idxs| idxs[0]);
    for idxs in duplicates {
        let rest: Vec<String> = idxs[1..].iter().map(|i| format!("docs[{i}]")).collect();
        report.issues.push(Issue::info(
            "record-duplicate",
            format!("docs[{}]", idxs[0]),
            format!("record repeated {} times (also at {})", idxs.len(), rest.join(", ")),
        ));
    }

    if report.is_valid() {
        round_trip_check(value, &mut report);
    }

    report
}

/// Re-serializing the typed model must reproduce the decoded value exactly.
fn round_trip_check(value: &Value, report: &mut ValidationReport) {
    match serde_json::from_value::<SearchIndex>(value.clone()) {
        Ok(index) => match serde_json::to_value(&index) {
            Ok(emitted) if emitted == *value => {}
            Ok(_) => report.issues.push(Issue::error(
                "round-trip",
                "$",
                "re-serialized index differs from the source",
            )),
            Err(err) => report.issues.push(Issue::error(
                "round-trip",
                "$",
                format!("re-serialization failed: {err}"),
            )),
        },
        Err(err) => report.issues.push(Issue::error(
            "round-trip",
            "$",
            format!("typed decode failed: {err}"),
        )),
    }
}
