//! Inverted index with BM25 scoring.
//!
//! Two posting maps per index: body text, and title+page terms which get a
//! configurable boost at scoring time. Documents are addressed by their
//! position in the `docs` sequence.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::index::SearchIndex;

use super::tokenizer::{TokenizerOptions, tokenize};

#[derive(Debug, Clone, Copy)]
pub struct Posting {
    pub doc: u32,
    pub tf: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Bm25Params {
    pub k1: f32,
    pub b: f32,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.2, b: 0.75 }
    }
}

/// Postings for a single field across the corpus.
#[derive(Debug, Default)]
pub struct FieldIndex {
    postings: HashMap<String, Vec<Posting>>,
    doc_len: Vec<u32>,
    avg_len: f32,
}

impl FieldIndex {
    fn build(docs: Vec<Vec<String>>) -> Self {
        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();
        let mut doc_len = Vec::with_capacity(docs.len());

        for (doc, tokens) in docs.into_iter().enumerate() {
            doc_len.push(tokens.len() as u32);
            let mut counts: HashMap<String, u32> = HashMap::new();
            for token in tokens {
                *counts.entry(token).or_default() += 1;
            }
            for (token, tf) in counts {
                postings.entry(token).or_default().push(Posting {
                    doc: doc as u32,
                    tf,
                });
            }
        }

        let total: u64 = doc_len.iter().map(|&len| len as u64).sum();
        let avg_len = if doc_len.is_empty() {
            0.0
        } else {
            total as f32 / doc_len.len() as f32
        };

        Self {
            postings,
            doc_len,
            avg_len,
        }
    }

    pub fn doc_count(&self) -> usize {
        self.doc_len.len()
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Accumulate BM25 contributions for `terms` into `scores`.
    fn score_into(&self, terms: &[String], params: Bm25Params, weight: f32, scores: &mut HashMap<u32, f32>) {
        let n = self.doc_len.len() as f32;
        if n == 0.0 || weight == 0.0 {
            return;
        }

        for term in terms {
            let Some(postings) = self.postings.get(term) else {
                continue;
            };
            let df = postings.len() as f32;
            let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();

            for posting in postings {
                let tf = posting.tf as f32;
                let dl = self.doc_len[posting.doc as usize] as f32;
                let norm = if self.avg_len > 0.0 { dl / self.avg_len } else { 1.0 };
                let denom = tf + params.k1 * (1.0 - params.b + params.b * norm);
                let contribution = idf * tf * (params.k1 + 1.0) / denom;
                *scores.entry(posting.doc).or_default() += weight * contribution;
            }
        }
    }
}

pub struct InvertedIndex {
    body: FieldIndex,
    title: FieldIndex,
}

impl InvertedIndex {
    /// Tokenize every record in parallel and build both field indexes.
    pub fn build(index: &SearchIndex, opts: &TokenizerOptions) -> Self {
        let body_tokens: Vec<Vec<String>> = index
            .docs
            .par_iter()
            .map(|record| tokenize(&record.text, opts))
            .collect();
        let title_tokens: Vec<Vec<String>> = index
            .docs
            .par_iter()
            .map(|record| {
                let mut tokens = tokenize(&record.title, opts);
                tokens.extend(tokenize(&record.page, opts));
                tokens
            })
            .collect();

        Self {
            body: FieldIndex::build(body_tokens),
            title: FieldIndex::build(title_tokens),
        }
    }

    pub fn doc_count(&self) -> usize {
        self.body.doc_count()
    }

    pub fn term_count(&self) -> usize {
        self.body.term_count() + self.title.term_count()
    }

    /// Score `terms` across both fields; title/page matches weighted by
    /// `title_boost`. Returns only documents with a nonzero score.
    pub fn score(&self, terms: &[String], params: Bm25Params, title_boost: f32) -> HashMap<u32, f32> {
        let mut scores = HashMap::new();
        self.body.score_into(terms, params, 1.0, &mut scores);
        self.title.score_into(terms, params, title_boost, &mut scores);
        scores
    }
}
