//! Query embedding cache.

mod query_cache;

pub use query_cache::{CacheStats, QueryEmbeddingCache};

/// Cache key for a query: blake3 of the trimmed, lower-cased text.
///
/// Queries differing only in case or surrounding whitespace share an entry.
pub fn query_key(text: &str) -> String {
    let normalized = text.trim().to_lowercase();
    blake3::hash(normalized.as_bytes()).to_hex().to_string()
}
