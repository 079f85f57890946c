use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Vector store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreConfig {
    /// Backend: "memory" or "supabase".
    pub backend: String,
    /// Project URL of the PostgREST endpoint (supabase backend).
    pub url: Option<String>,
    pub api_key: Option<String>,
    /// Name of the similarity-search RPC function.
    pub match_function: String,
    pub request_timeout_ms: u64,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            backend: defaults::DEFAULT_VECTOR_BACKEND.to_string(),
            url: None,
            api_key: None,
            match_function: defaults::DEFAULT_MATCH_FUNCTION.to_string(),
            request_timeout_ms: defaults::DEFAULT_HTTP_TIMEOUT_MS,
        }
    }
}

impl VectorStoreConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "vector_store.request_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        match self.backend.as_str() {
            "memory" => Ok(()),
            "supabase" => {
                if self.url.as_deref().map_or(true, str::is_empty) {
                    return Err(ConfigError::ValidationFailed {
                        field: "vector_store.url".to_string(),
                        message: "required for the supabase backend".to_string(),
                    });
                }
                if self.api_key.as_deref().map_or(true, str::is_empty) {
                    return Err(ConfigError::ValidationFailed {
                        field: "vector_store.api_key".to_string(),
                        message: "required for the supabase backend".to_string(),
                    });
                }
                if self.match_function.trim().is_empty() {
                    return Err(ConfigError::ValidationFailed {
                        field: "vector_store.match_function".to_string(),
                        message: "must not be empty".to_string(),
                    });
                }
                Ok(())
            }
            other => Err(ConfigError::ValidationFailed {
                field: "vector_store.backend".to_string(),
                message: format!("unsupported backend '{other}' (expected memory or supabase)"),
            }),
        }
    }
}
