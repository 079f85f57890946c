//! Top-level Solace configuration with layered resolution.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
    EmbeddingConfig, ObservabilityConfig, RetrievalConfig, TopicConfig, VectorStoreConfig,
};
use crate::constants::ENV_PREFIX;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SOLACE_*`)
/// 2. Config file (`solace.toml`)
/// 3. Compiled defaults
///
/// Values are immutable once the process starts serving.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolaceConfig {
    pub retrieval: RetrievalConfig,
    pub embedding: EmbeddingConfig,
    pub vector_store: VectorStoreConfig,
    pub topics: TopicConfig,
    pub observability: ObservabilityConfig,
}

impl SolaceConfig {
    /// Load configuration: defaults, then `path` (if given), then the process
    /// environment. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `SOLACE_*` overrides read through `lookup`.
    ///
    /// Unparseable values are rejected rather than ignored.
    pub fn apply_env_overrides_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{ENV_PREFIX}{suffix}"));

        if let Some(v) = var("RETRIEVAL_TOP_K") {
            self.retrieval.top_k = parse_env("RETRIEVAL_TOP_K", &v)?;
        }
        if let Some(v) = var("RETRIEVAL_THRESHOLD") {
            self.retrieval.similarity_threshold = parse_env("RETRIEVAL_THRESHOLD", &v)?;
        }
        if let Some(v) = var("RETRIEVAL_CANDIDATE_MULTIPLIER") {
            self.retrieval.candidate_multiplier =
                parse_env("RETRIEVAL_CANDIDATE_MULTIPLIER", &v)?;
        }
        if let Some(v) = var("TOPIC_BOOST_FACTOR") {
            self.retrieval.topic_boost_factor = parse_env("TOPIC_BOOST_FACTOR", &v)?;
        }
        if let Some(v) = var("EMBEDDING_PROVIDER") {
            self.embedding.provider = v;
        }
        if let Some(v) = var("EMBEDDING_ENDPOINT") {
            self.embedding.endpoint = Some(v);
        }
        if let Some(v) = var("EMBEDDING_API_KEY") {
            self.embedding.api_key = Some(v);
        }
        if let Some(v) = var("EMBEDDING_DIMENSIONS") {
            self.embedding.dimensions = parse_env("EMBEDDING_DIMENSIONS", &v)?;
        }
        if let Some(v) = var("VECTOR_STORE_BACKEND") {
            self.vector_store.backend = v;
        }
        if let Some(v) = var("VECTOR_STORE_URL") {
            self.vector_store.url = Some(v);
        }
        if let Some(v) = var("VECTOR_STORE_KEY") {
            self.vector_store.api_key = Some(v);
        }
        if let Some(v) = var("LOG_LEVEL") {
            self.observability.log_level = v;
        }
        Ok(())
    }

    /// Validate every section. Any failure is fatal at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.retrieval.validate()?;
        self.embedding.validate()?;
        self.vector_store.validate()?;
        self.topics.validate()?;
        Ok(())
    }
}

fn parse_env<T: FromStr>(suffix: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::ValidationFailed {
        field: format!("{ENV_PREFIX}{suffix}"),
        message: format!("cannot parse '{raw}'"),
    })
}
