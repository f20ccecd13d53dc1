//! Exact-phrase scanning over record text.
//!
//! Quoted query terms bypass tokenization entirely: a phrase matches when its
//! folded form occurs as a substring of the folded record text. The corpus is
//! folded once at engine build time.

use memchr::memmem;
use rayon::prelude::*;

use super::tokenizer::fold;

/// Scan a pre-folded corpus for one phrase. Returns `(doc, occurrences)` for
/// every document with at least one hit.
pub fn scan(corpus: &[String], phrase: &str) -> Vec<(u32, u32)> {
    let needle = fold(phrase);
    if needle.is_empty() {
        return Vec::new();
    }

    let finder = memmem::Finder::new(needle.as_bytes());
    corpus
        .par_iter()
        .enumerate()
        .filter_map(|(doc, text)| {
            let count = finder.find_iter(text.as_bytes()).count() as u32;
            (count > 0).then_some((doc as u32, count))
        })
        .collect()
}

/// Documents matching every phrase, scored by total occurrences.
pub fn scan_all(corpus: &[String], phrases: &[String]) -> Vec<(u32, u32)> {
    let mut merged: Option<std::collections::HashMap<u32, u32>> = None;

    for phrase in phrases {
        let hits: std::collections::HashMap<u32, u32> = scan(corpus, phrase).into_iter().collect();
        merged = Some(match merged {
            None => hits,
            Some(prev) => prev
                .into_iter()
                .filter_map(|(doc, count)| hits.get(&doc).map(|extra| (doc, count + extra)))
                .collect(),
        });
    }

    let mut result: Vec<(u32, u32)> = merged.unwrap_or_default().into_iter().collect();
    result.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    result
}
