//! Embedding providers and the factory that picks one from configuration.

mod hashing_provider;
mod http_provider;

use std::sync::Arc;

pub use hashing_provider::HashingEmbeddingProvider;
pub use http_provider::HttpEmbeddingProvider;

use solace_core::config::EmbeddingConfig;
use solace_core::errors::{EmbeddingError, SolaceResult};
use solace_core::traits::IEmbeddingProvider;

/// Build the provider named by `config.provider`.
///
/// The returned provider is bare; wrap it in [`crate::EmbeddingEngine`] for
/// caching and dimension checks.
pub fn create_provider(config: &EmbeddingConfig) -> SolaceResult<Arc<dyn IEmbeddingProvider>> {
    match config.provider.as_str() {
        "hashing" => Ok(Arc::new(HashingEmbeddingProvider::new(config.dimensions))),
        "http" => Ok(Arc::new(HttpEmbeddingProvider::from_config(config)?)),
        other => Err(EmbeddingError::ProviderUnavailable {
            provider: other.to_string(),
        }
        .into()),
    }
}
