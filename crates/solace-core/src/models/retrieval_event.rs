use serde::{Deserialize, Serialize};

use crate::topic::Topic;

/// Structured, fire-and-forget events emitted while serving a retrieval.
///
/// Observers receive these by reference; nothing they do can feed back
/// into the retrieval result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RetrievalEvent {
    QueryTopicInferred {
        query: String,
        inferred_topic: Option<Topic>,
    },
    VectorSearchComplete {
        candidates_found: usize,
        candidates_requested: usize,
        threshold: f64,
    },
    TopicBoostApplied {
        query_topic: Topic,
        doc_topic: Topic,
        original_score: f64,
        boosted_score: f64,
    },
    RetrievalComplete {
        query_topic: Option<Topic>,
        final_count: usize,
        scores: Vec<f64>,
        topics: Vec<Option<Topic>>,
    },
    RetrievalFailed {
        kind: String,
        reason: String,
    },
}

impl RetrievalEvent {
    /// Event name as written to the structured log.
    pub fn name(&self) -> &'static str {
        match self {
            RetrievalEvent::QueryTopicInferred { .. } => "query_topic_inferred",
            RetrievalEvent::VectorSearchComplete { .. } => "vector_search_complete",
            RetrievalEvent::TopicBoostApplied { .. } => "topic_boost_applied",
            RetrievalEvent::RetrievalComplete { .. } => "retrieval_complete",
            RetrievalEvent::RetrievalFailed { .. } => "retrieval_failed",
        }
    }
}
