use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{METADATA_CHUNK_INDEX_KEY, METADATA_SOURCE_KEY};
use crate::topic::Topic;

/// Arbitrary chunk metadata (source filename, chunk index, ...).
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// A retrieved document chunk.
///
/// Treated as an immutable value: score adjustments go through
/// [`Document::with_score`], which returns a new document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
    /// Similarity score, higher = more similar. May exceed the backend's
    /// natural range after boosting.
    pub score: f64,
    #[serde(default)]
    pub topic: Option<Topic>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Document {
    pub fn new(id: impl Into<String>, content: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            score,
            topic: None,
            metadata: Metadata::new(),
        }
    }

    pub fn with_topic(mut self, topic: Option<Topic>) -> Self {
        self.topic = topic;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Copy of this document carrying a different score.
    pub fn with_score(&self, score: f64) -> Self {
        Self {
            score,
            ..self.clone()
        }
    }

    /// Source filename, if the chunk recorded one.
    pub fn source(&self) -> Option<&str> {
        self.metadata.get(METADATA_SOURCE_KEY).and_then(|v| v.as_str())
    }

    /// Position of the chunk within its source document.
    pub fn chunk_index(&self) -> Option<u64> {
        self.metadata
            .get(METADATA_CHUNK_INDEX_KEY)
            .and_then(|v| v.as_u64())
    }
}
