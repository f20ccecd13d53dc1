//! Document and query tokenization.
//!
//! NFKC fold, lowercase, split on non-alphanumeric. The same pass is applied
//! to indexed text and to queries so terms always compare equal.

use std::collections::HashSet;
use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;

/// English stopwords dropped during indexing and query parsing.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "if",
    "in", "into", "is", "it", "its", "no", "not", "of", "on", "or", "such", "that", "the", "their",
    "then", "there", "these", "they", "this", "to", "was", "will", "with",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

#[derive(Debug, Clone, Copy)]
pub struct TokenizerOptions {
    pub min_token_len: usize,
    pub stopwords: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            min_token_len: 2,
            stopwords: true,
        }
    }
}

/// NFKC-normalize and lowercase, without splitting. Used for phrase scans so
/// offsets line up with the tokenized view of the corpus.
pub fn fold(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}

pub fn tokenize(text: &str, opts: &TokenizerOptions) -> Vec<String> {
    fold(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= opts.min_token_len.max(1))
        .filter(|token| !opts.stopwords || !STOPWORD_SET.contains(token))
        .map(str::to_string)
        .collect()
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}
