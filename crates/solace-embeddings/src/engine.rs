//! EmbeddingEngine: the query-embedding entry point for solace-embeddings.
//!
//! Wraps one provider with a query cache and dimension validation.
//! Implements `IEmbeddingProvider`.

use std::sync::Arc;

use async_trait::async_trait;
use solace_core::config::EmbeddingConfig;
use solace_core::errors::SolaceResult;
use solace_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::{CacheStats, QueryEmbeddingCache};
use crate::dimensions;
use crate::providers;

/// The embedding engine.
///
/// There is no fallback chain: a fallback provider would produce vectors in a
/// different space from the indexed chunks, so a provider failure surfaces as
/// an error instead.
pub struct EmbeddingEngine {
    provider: Arc<dyn IEmbeddingProvider>,
    cache: Option<QueryEmbeddingCache>,
    dimensions: usize,
}

impl EmbeddingEngine {
    /// Create an engine around the provider named in `config`.
    pub fn new(config: &EmbeddingConfig) -> SolaceResult<Self> {
        let provider = providers::create_provider(config)?;
        Ok(Self::with_provider(provider, config))
    }

    /// Create an engine around an explicit provider.
    pub fn with_provider(provider: Arc<dyn IEmbeddingProvider>, config: &EmbeddingConfig) -> Self {
        let cache = config
            .cache_enabled
            .then(|| QueryEmbeddingCache::new(config.l1_cache_size, config.dimensions));

        info!(
            provider = provider.name(),
            dims = config.dimensions,
            cache = config.cache_enabled,
            "EmbeddingEngine initialized"
        );

        Self {
            provider,
            cache,
            dimensions: config.dimensions,
        }
    }

    /// Embed a query, consulting the cache first.
    ///
    /// Only vectors that pass dimension validation are cached.
    pub async fn embed_cached(&self, text: &str) -> SolaceResult<Vec<f32>> {
        if let Some(cache) = &self.cache {
            if let Some(vec) = cache.get(text) {
                debug!(query_len = text.len(), "cache hit for query embedding");
                return Ok(vec);
            }
        }

        let embedding = self.provider.embed(text).await?;
        dimensions::validate_dimensions(&embedding, self.dimensions)?;

        if let Some(cache) = &self.cache {
            cache.insert(text, &embedding);
        }
        Ok(embedding)
    }

    /// Name of the wrapped provider.
    pub fn active_provider(&self) -> &str {
        self.provider.name()
    }

    /// Cache counters; all zero when caching is disabled.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache
            .as_ref()
            .map(QueryEmbeddingCache::stats)
            .unwrap_or_default()
    }

    /// Drop every cached embedding.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}

#[async_trait]
impl IEmbeddingProvider for EmbeddingEngine {
    async fn embed(&self, text: &str) -> SolaceResult<Vec<f32>> {
        self.embed_cached(text).await
    }

    async fn embed_batch(&self, texts: &[String]) -> SolaceResult<Vec<Vec<f32>>> {
        let vectors = self.provider.embed_batch(texts).await?;
        for vec in &vectors {
            dimensions::validate_dimensions(vec, self.dimensions)?;
        }
        Ok(vectors)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "solace-embedding-engine"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use solace_core::errors::{EmbeddingError, SolaceError};

    use super::*;

    /// Counts calls and returns a fixed-size vector.
    struct CountingProvider {
        calls: AtomicUsize,
        dims: usize,
    }

    #[async_trait]
    impl IEmbeddingProvider for CountingProvider {
        async fn embed(&self, _text: &str) -> SolaceResult<Vec<f32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![0.5; self.dims])
        }
        fn dimensions(&self) -> usize {
            self.dims
        }
        fn name(&self) -> &str {
            "counting"
        }
    }

    fn config(dims: usize) -> EmbeddingConfig {
        EmbeddingConfig {
            dimensions: dims,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn default_engine_embeds_with_configured_dims() {
        let engine = EmbeddingEngine::new(&config(128)).unwrap();
        let vec = engine.embed("how do I calm down").await.unwrap();
        assert_eq!(vec.len(), 128);
        assert_eq!(engine.active_provider(), "hashing");
    }

    #[tokio::test]
    async fn repeated_query_hits_cache() {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
            dims: 8,
        });
        let engine = EmbeddingEngine::with_provider(provider.clone(), &config(8));

        engine.embed("I feel anxious").await.unwrap();
        engine.embed("  i feel ANXIOUS ").await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        let stats = engine.cache_stats();
        assert_eq!((stats.hits, stats.misses), (1, 1));
    }

    #[tokio::test]
    async fn disabled_cache_always_calls_provider() {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
            dims: 8,
        });
        let cfg = EmbeddingConfig {
            cache_enabled: false,
            ..config(8)
        };
        let engine = EmbeddingEngine::with_provider(provider.clone(), &cfg);

        engine.embed("stress").await.unwrap();
        engine.embed("stress").await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
        assert_eq!(engine.cache_stats(), CacheStats::default());
    }

    #[tokio::test]
    async fn wrong_dimensions_are_rejected_and_not_cached() {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
            dims: 4,
        });
        let engine = EmbeddingEngine::with_provider(provider.clone(), &config(8));

        let err = engine.embed("breathing").await.unwrap_err();
        assert!(matches!(
            err,
            SolaceError::EmbeddingError(EmbeddingError::DimensionMismatch {
                expected: 8,
                actual: 4
            })
        ));
        assert!(engine.embed("breathing").await.is_err());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn batch_validates_every_vector() {
        let engine = EmbeddingEngine::new(&config(32)).unwrap();
        let texts = vec!["one thing".to_string(), "another thing".to_string()];
        let vectors = engine.embed_batch(&texts).await.unwrap();
        assert_eq!(vectors.len(), 2);
        assert!(vectors.iter().all(|v| v.len() == 32));
    }
}
