//! Reciprocal rank fusion of keyword and phrase rankings.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Fusion parameters.
#[derive(Debug, Clone, Copy)]
pub struct RrfConfig {
    /// Rank damping constant.
    pub k: f32,
    pub keyword_weight: f32,
    pub phrase_weight: f32,
}

impl Default for RrfConfig {
    fn default() -> Self {
        Self {
            k: 60.0,
            keyword_weight: 1.0,
            phrase_weight: 1.0,
        }
    }
}

/// Fuse two ranked `(doc, score)` lists. Input scores only matter through
/// their ordering; the fused score is the weighted sum of reciprocal ranks.
pub fn fuse_results(
    keyword: &[(u32, f32)],
    phrase: &[(u32, f32)],
    config: &RrfConfig,
) -> Vec<(u32, f32)> {
    let mut fused: HashMap<u32, f32> = HashMap::new();

    for (rank, (doc, _)) in keyword.iter().enumerate() {
        *fused.entry(*doc).or_default() += config.keyword_weight / (config.k + rank as f32 + 1.0);
    }
    for (rank, (doc, _)) in phrase.iter().enumerate() {
        *fused.entry(*doc).or_default() += config.phrase_weight / (config.k + rank as f32 + 1.0);
    }

    let mut result: Vec<(u32, f32)> = fused.into_iter().collect();
    result.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    result
}
