//! LRU caching for query results.
//!
//! All cache operations are non-blocking (try-lock pattern): a contended or
//! poisoned lock degrades to a miss rather than stalling a search.

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

use super::SearchHit;

const DEFAULT_QUERY_CACHE_SIZE: usize = 128;

/// Cached result set with bookkeeping for tuning.
#[derive(Debug, Clone)]
pub struct CachedQuery {
    pub hits: Vec<SearchHit>,
    pub cached_at: std::time::Instant,
}

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Thread-safe query result cache.
pub struct CacheLayer {
    enabled: bool,
    queries: Mutex<LruCache<u64, CachedQuery>>,
    stats: Mutex<CacheStats>,
}

impl Default for CacheLayer {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_CACHE_SIZE)
    }
}

impl CacheLayer {
    pub fn new(size: usize) -> Self {
        let capacity = NonZeroUsize::new(size.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            enabled: true,
            queries: Mutex::new(LruCache::new(capacity)),
            stats: Mutex::new(CacheStats::default()),
        }
    }

    /// A cache that never stores or returns anything.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            queries: Mutex::new(LruCache::new(NonZeroUsize::MIN)),
            stats: Mutex::new(CacheStats::default()),
        }
    }

    /// Cache key over the query and every option that shapes the result set.
    pub fn key(query: &str, limit: usize, category: Option<&str>, page: Option<&str>) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        query.hash(&mut hasher);
        limit.hash(&mut hasher);
        category.hash(&mut hasher);
        page.hash(&mut hasher);
        hasher.finish()
    }

    pub fn get(&self, key: u64) -> Option<Vec<SearchHit>> {
        if !self.enabled {
            return None;
        }

        let result = self
            .queries
            .try_lock()
            .ok()
            .and_then(|mut cache| cache.get(&key).map(|entry| entry.hits.clone()));

        if let Ok(mut stats) = self.stats.try_lock() {
            if result.is_some() {
                stats.hits += 1;
            } else {
                stats.misses += 1;
            }
        }

        result
    }

    pub fn put(&self, key: u64, hits: &[SearchHit]) {
        if !self.enabled {
            return;
        }
        if let Ok(mut cache) = self.queries.try_lock() {
            cache.put(
                key,
                CachedQuery {
                    hits: hits.to_vec(),
                    cached_at: std::time::Instant::now(),
                },
            );
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
            .try_lock()
            .map(|stats| stats.clone())
            .unwrap_or_default()
    }
}
