use solace_core::models::RetrievalEvent;
use solace_core::topic::Topic;
use solace_core::traits::IRetrievalObserver;
use tracing::{info, warn};

/// Writes every retrieval event to the `tracing` pipeline.
///
/// The `event` field carries the event name (`query_topic_inferred`,
/// `topic_boost_applied`, `retrieval_complete`, ...). The query text itself
/// is logged only as a length.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl IRetrievalObserver for TracingObserver {
    fn on_event(&self, event: &RetrievalEvent) {
        let name = event.name();
        match event {
            RetrievalEvent::QueryTopicInferred {
                query,
                inferred_topic,
            } => info!(
                event = name,
                query_len = query.chars().count(),
                inferred_topic = Topic::label_or_none(*inferred_topic),
                "query topic inferred"
            ),
            RetrievalEvent::VectorSearchComplete {
                candidates_found,
                candidates_requested,
                threshold,
            } => info!(
                event = name,
                candidates_found,
                candidates_requested,
                threshold,
                "vector search complete"
            ),
            RetrievalEvent::TopicBoostApplied {
                query_topic,
                doc_topic,
                original_score,
                boosted_score,
            } => info!(
                event = name,
                query_topic = query_topic.as_str(),
                doc_topic = doc_topic.as_str(),
                original_score,
                boosted_score,
                "topic boost applied"
            ),
            RetrievalEvent::RetrievalComplete {
                query_topic,
                final_count,
                scores,
                topics,
            } => {
                let topics: Vec<&str> = topics.iter().map(|t| Topic::label_or_none(*t)).collect();
                info!(
                    event = name,
                    query_topic = Topic::label_or_none(*query_topic),
                    final_count,
                    scores = ?scores,
                    topics = ?topics,
                    "retrieval complete"
                )
            }
            RetrievalEvent::RetrievalFailed { kind, reason } => warn!(
                event = name,
                kind = %kind,
                reason = %reason,
                "retrieval failed"
            ),
        }
    }
}
