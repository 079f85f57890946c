//! Query-level embedding cache on top of `moka`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use serde::Serialize;
use tracing::warn;

use super::query_key;

/// Entries unused for this long are evicted.
const IDLE_EXPIRY: Duration = Duration::from_secs(60 * 60);
/// Upper bound on any entry's lifetime, so a redeployed model's vectors
/// eventually replace stale ones.
const MAX_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Hit/miss counters for a [`QueryEmbeddingCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Approximate; moka applies evictions lazily.
    pub entries: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}

/// Caches query embeddings by the raw query text.
///
/// Text is normalized through [`query_key`], so callers never build keys
/// themselves. Only vectors of the deployment's dimension are admitted.
pub struct QueryEmbeddingCache {
    entries: Cache<String, Arc<[f32]>>,
    dimensions: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QueryEmbeddingCache {
    pub fn new(max_entries: u64, dimensions: usize) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(IDLE_EXPIRY)
            .time_to_live(MAX_LIFETIME)
            .build();
        Self {
            entries,
            dimensions,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up the embedding for `query`.
    pub fn get(&self, query: &str) -> Option<Vec<f32>> {
        match self.entries.get(&query_key(query)) {
            Some(vector) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(vector.to_vec())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store the embedding for `query`. Returns `false` (and stores nothing)
    /// when the vector has the wrong dimension.
    pub fn insert(&self, query: &str, embedding: &[f32]) -> bool {
        if embedding.len() != self.dimensions {
            warn!(
                expected = self.dimensions,
                actual = embedding.len(),
                "refusing to cache embedding with wrong dimension"
            );
            return false;
        }
        self.entries.insert(query_key(query), Arc::from(embedding));
        true
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.entry_count(),
        }
    }

    /// Invalidate every entry. Counters are kept.
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}
