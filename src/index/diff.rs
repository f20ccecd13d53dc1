//! Snapshot comparison between two index versions.
//!
//! Record identity is the content fingerprint over all five fields, with
//! multiset semantics: duplicate records diff by count. A per-page rollup
//! summarizes where the churn happened.

use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use super::{SearchIndex, SearchRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaStatus {
    Added,
    Removed,
    Modified,
    Unchanged,
}

impl fmt::Display for DeltaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeltaStatus::Added => write!(f, "added"),
            DeltaStatus::Removed => write!(f, "removed"),
            DeltaStatus::Modified => write!(f, "modified"),
            DeltaStatus::Unchanged => write!(f, "unchanged"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageDelta {
    pub page: String,
    pub status: DeltaStatus,
    pub added: usize,
    pub removed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexDiff {
    pub added: Vec<SearchRecord>,
    pub removed: Vec<SearchRecord>,
    pub unchanged: usize,
    pub pages: Vec<PageDelta>,
}

impl IndexDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

pub fn diff(old: &SearchIndex, new: &SearchIndex) -> IndexDiff {
    let mut remaining: HashMap<String, usize> = HashMap::new();
    for record in &old.docs {
        *remaining.entry(record.fingerprint()).or_default() += 1;
    }

    let mut added = Vec::new();
    let mut unchanged = 0usize;
    for record in &new.docs {
        match remaining.get_mut(&record.fingerprint()) {
            Some(count) if *count > 0 => {
                *count -= 1;
                unchanged += 1;
            }
            _ => added.push(record.clone()),
        }
    }

    // Whatever was not consumed by the new snapshot was removed.
    let mut removed = Vec::new();
    for record in &old.docs {
        if let Some(count) = remaining.get_mut(&record.fingerprint()) {
            if *count > 0 {
                *count -= 1;
                removed.push(record.clone());
            }
        }
    }

    let pages = page_rollup(old, new, &added, &removed);

    IndexDiff {
        added,
        removed,
        unchanged,
        pages,
    }
}

fn page_rollup(
    old: &SearchIndex,
    new: &SearchIndex,
    added: &[SearchRecord],
    removed: &[SearchRecord],
) -> Vec<PageDelta> {
    let old_pages: Vec<&str> = old.pages();
    let new_pages: Vec<&str> = new.pages();

    let added_by_page: HashMap<&str, usize> = added.iter().counts_by(|r| r.page.as_str());
    let removed_by_page: HashMap<&str, usize> = removed.iter().counts_by(|r| r.page.as_str());

    old_pages
        .iter()
        .chain(new_pages.iter())
        .unique()
        .map(|page| {
            let added = added_by_page.get(page).copied().unwrap_or(0);
            let removed = removed_by_page.get(page).copied().unwrap_or(0);
            let in_old = old_pages.contains(page);
            let in_new = new_pages.contains(page);
            let status = match (in_old, in_new) {
                (false, true) => DeltaStatus::Added,
                (true, false) => DeltaStatus::Removed,
                _ if added > 0 || removed > 0 => DeltaStatus::Modified,
                _ => DeltaStatus::Unchanged,
            };
            PageDelta {
                page: page.to_string(),
                status,
                added,
                removed,
            }
        })
        .sorted_by(|a, b| a.page.cmp(&b.page))
        .collect()
}
