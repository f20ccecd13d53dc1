//! Corpus statistics over a loaded index.

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::Serialize;

use super::SearchIndex;

#[derive(Debug, Clone, Serialize)]
pub struct PageStat {
    pub page: String,
    pub records: usize,
    pub text_bytes: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub records: usize,
    pub pages: usize,
    /// Distinct location values (records may share one).
    pub locations: usize,
    pub categories: BTreeMap<String, usize>,
    pub text_bytes: u64,
    pub avg_text_bytes: u64,
    pub empty_text: usize,
    /// Largest pages by record count.
    pub largest_pages: Vec<PageStat>,
}

pub fn collect(index: &SearchIndex, top: usize) -> IndexStats {
    let records = index.len();
    let locations = index
        .docs
        .iter()
        .map(|record| record.location.as_str())
        .unique()
        .count();

    let mut categories: BTreeMap<String, usize> = BTreeMap::new();
    for record in &index.docs {
        *categories.entry(record.category.to_string()).or_default() += 1;
    }

    let text_bytes: u64 = index.docs.iter().map(|r| r.text.len() as u64).sum();
    let empty_text = index.docs.iter().filter(|r| r.text.is_empty()).count();

    let largest_pages: Vec<PageStat> = index
        .docs
        .iter()
        .into_group_map_by(|record| record.page.as_str())
        .into_iter()
        .map(|(page, group)| PageStat {
            page: page.to_string(),
            records: group.len(),
            text_bytes: group.iter().map(|r| r.text.len() as u64).sum(),
        })
        .sorted_by(|a, b| b.records.cmp(&a.records).then_with(|| a.page.cmp(&b.page)))
        .take(top)
        .collect();

    IndexStats {
        records,
        pages: index.pages().len(),
        locations,
        categories,
        text_bytes,
        avg_text_bytes: if records == 0 { 0 } else { text_bytes / records as u64 },
        empty_text,
        largest_pages,
    }
}
