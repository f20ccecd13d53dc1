//! Query engine over a loaded search index.
//!
//! Bare terms are keyword-matched with BM25 over an inverted index (titles
//! and page names boosted); quoted terms are exact substring phrases. When a
//! query mixes both, the two rankings are fused with reciprocal rank fusion.

pub mod cache;
pub mod fuse;
pub mod inverted;
pub mod phrase;
pub mod snippet;
pub mod tokenizer;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::config::SearchConfig;
use crate::index::{Category, SearchIndex};

use fuse::RrfConfig;
use inverted::{Bm25Params, InvertedIndex};
use tokenizer::TokenizerOptions;

/// One ranked search result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub location: String,
    pub page: String,
    pub title: String,
    pub category: String,
    pub score: f32,
    pub snippet: String,
}

#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Overrides the configured default limit.
    pub limit: Option<usize>,
    pub category: Option<Category>,
    pub page: Option<String>,
}

/// Parsed query: bare terms plus quoted phrases.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub terms: Vec<String>,
    pub phrases: Vec<String>,
}

impl Query {
    /// Split `raw` into quoted phrases and tokenized bare terms. An unclosed
    /// quote runs to the end of the input.
    pub fn parse(raw: &str, opts: &TokenizerOptions) -> Self {
        let mut terms = Vec::new();
        let mut phrases = Vec::new();
        let mut rest = raw;

        while let Some(open) = rest.find('"') {
            terms.extend(tokenizer::tokenize(&rest[..open], opts));
            let after = &rest[open + 1..];
            match after.find('"') {
                Some(close) => {
                    let phrase = after[..close].trim();
                    if !phrase.is_empty() {
                        phrases.push(phrase.to_string());
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    let phrase = after.trim();
                    if !phrase.is_empty() {
                        phrases.push(phrase.to_string());
                    }
                    rest = "";
                }
            }
        }
        terms.extend(tokenizer::tokenize(rest, opts));

        Self { terms, phrases }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.phrases.is_empty()
    }
}

/// In-memory engine built once per loaded index.
pub struct SearchEngine {
    index: SearchIndex,
    folded: Vec<String>,
    inverted: InvertedIndex,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn build(index: SearchIndex, config: &SearchConfig) -> Self {
        let opts = TokenizerOptions {
            min_token_len: config.min_token_len,
            stopwords: config.stopwords,
        };
        let inverted = InvertedIndex::build(&index, &opts);
        let folded: Vec<String> = index
            .docs
            .par_iter()
            .map(|record| tokenizer::fold(&record.text))
            .collect();

        debug!(
            records = index.docs.len(),
            terms = inverted.term_count(),
            "search engine built"
        );

        Self {
            index,
            folded,
            inverted,
            config: config.clone(),
        }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn search(&self, raw_query: &str, opts: &SearchOptions) -> Vec<SearchHit> {
        let limit = opts.limit.unwrap_or(self.config.limit);
        if limit == 0 {
            return Vec::new();
        }

        let tok_opts = TokenizerOptions {
            min_token_len: self.config.min_token_len,
            stopwords: self.config.stopwords,
        };
        let query = Query::parse(raw_query, &tok_opts);
        if query.is_empty() {
            return Vec::new();
        }

        let ranked = self.rank(&query);
        debug!(
            query = raw_query,
            candidates = ranked.len(),
            "query ranked"
        );

        let needles: Vec<String> = query
            .terms
            .iter()
            .cloned()
            .chain(query.phrases.iter().cloned())
            .collect();

        ranked
            .into_iter()
            .map(|(doc, score)| (&self.index.docs[doc as usize], score))
            .filter(|(record, _)| match &opts.category {
                Some(category) => record.category == *category,
                None => true,
            })
            .filter(|(record, _)| match &opts.page {
                Some(page) => record.page.eq_ignore_ascii_case(page),
                None => true,
            })
            .take(limit)
            .map(|(record, score)| SearchHit {
                location: record.location.clone(),
                page: record.page.clone(),
                title: record.title.clone(),
                category: record.category.to_string(),
                score,
                snippet: snippet::make_snippet(&record.text, &needles, self.config.snippet_width),
            })
            .collect()
    }

    /// Fused `(doc, score)` ranking for a parsed query.
    fn rank(&self, query: &Query) -> Vec<(u32, f32)> {
        let keyword = if query.terms.is_empty() {
            Vec::new()
        } else {
            let params = Bm25Params {
                k1: self.config.bm25_k1,
                b: self.config.bm25_b,
            };
            let scores = self
                .inverted
                .score(&query.terms, params, self.config.title_boost);
            let mut ranked: Vec<(u32, f32)> = scores.into_iter().collect();
            ranked.sort_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.0.cmp(&b.0))
            });
            ranked
        };

        let phrases = if query.phrases.is_empty() {
            Vec::new()
        } else {
            phrase::scan_all(&self.folded, &query.phrases)
                .into_iter()
                .map(|(doc, count)| (doc, count as f32))
                .collect()
        };

        match (keyword.is_empty(), phrases.is_empty()) {
            (false, true) => keyword,
            (true, false) => phrases,
            (true, true) => Vec::new(),
            (false, false) => {
                let config = RrfConfig {
                    k: self.config.rrf_k,
                    ..RrfConfig::default()
                };
                fuse::fuse_results(&keyword, &phrases, &config)
            }
        }
    }
}
