use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "hashing" (local, deterministic) or "http".
    pub provider: String,
    /// Full URL of the embeddings endpoint (http provider).
    pub endpoint: Option<String>,
    /// API key sent in the `api-key` header (http provider).
    pub api_key: Option<String>,
    /// Model or deployment name sent with each request.
    pub model: String,
    /// Dimension D of every vector. Fixed per deployment.
    pub dimensions: usize,
    /// Ask the remote model to shorten its output to `dimensions`.
    pub request_dimensions: bool,
    /// L1 in-memory cache max entries.
    pub l1_cache_size: u64,
    pub cache_enabled: bool,
    /// HTTP client timeout.
    pub request_timeout_ms: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            endpoint: None,
            api_key: None,
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            request_dimensions: false,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
            cache_enabled: defaults::DEFAULT_EMBEDDING_CACHE_ENABLED,
            request_timeout_ms: defaults::DEFAULT_HTTP_TIMEOUT_MS,
        }
    }
}

impl EmbeddingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.dimensions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.request_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        match self.provider.as_str() {
            "hashing" => Ok(()),
            "http" => {
                if self.endpoint.as_deref().map_or(true, str::is_empty) {
                    return Err(ConfigError::ValidationFailed {
                        field: "embedding.endpoint".to_string(),
                        message: "required for the http provider".to_string(),
                    });
                }
                if self.api_key.as_deref().map_or(true, str::is_empty) {
                    return Err(ConfigError::ValidationFailed {
                        field: "embedding.api_key".to_string(),
                        message: "required for the http provider".to_string(),
                    });
                }
                Ok(())
            }
            other => Err(ConfigError::ValidationFailed {
                field: "embedding.provider".to_string(),
                message: format!("unsupported provider '{other}' (expected hashing or http)"),
            }),
        }
    }
}
