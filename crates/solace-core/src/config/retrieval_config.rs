use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of documents returned to the caller.
    pub top_k: usize,
    /// Minimum similarity a candidate needs to come back from vector search.
    pub similarity_threshold: f64,
    /// Over-fetch factor: the reranker sees `top_k * candidate_multiplier` candidates.
    pub candidate_multiplier: usize,
    /// Added to the score of candidates whose topic matches the query topic.
    /// Negative values act as a penalty.
    pub topic_boost_factor: f64,
    /// Upper bound on the query embedding call.
    pub embedding_timeout_ms: u64,
    /// Upper bound on the vector search call.
    pub search_timeout_ms: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            candidate_multiplier: defaults::DEFAULT_CANDIDATE_MULTIPLIER,
            topic_boost_factor: defaults::DEFAULT_TOPIC_BOOST_FACTOR,
            embedding_timeout_ms: defaults::DEFAULT_EMBEDDING_TIMEOUT_MS,
            search_timeout_ms: defaults::DEFAULT_SEARCH_TIMEOUT_MS,
        }
    }
}

impl RetrievalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_k == 0 {
            return Err(invalid("retrieval.top_k", "must be at least 1"));
        }
        if self.candidate_multiplier == 0 {
            return Err(invalid("retrieval.candidate_multiplier", "must be at least 1"));
        }
        if !self.similarity_threshold.is_finite() {
            return Err(invalid("retrieval.similarity_threshold", "must be a finite number"));
        }
        if !self.topic_boost_factor.is_finite() {
            return Err(invalid("retrieval.topic_boost_factor", "must be a finite number"));
        }
        if self.embedding_timeout_ms == 0 {
            return Err(invalid("retrieval.embedding_timeout_ms", "must be greater than 0"));
        }
        if self.search_timeout_ms == 0 {
            return Err(invalid("retrieval.search_timeout_ms", "must be greater than 0"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
