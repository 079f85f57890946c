//! Additive topic boost.

use solace_core::models::{Document, RetrievalEvent};
use solace_core::topic::Topic;

/// Apply `boost_factor` to every document whose topic equals `query_topic`.
///
/// Matching documents are replaced by new values with `score + boost_factor`;
/// the sum is not capped and a negative factor lowers the score. One
/// `TopicBoostApplied` event is produced per boosted document, in input order.
pub fn boost(
    candidates: Vec<Document>,
    query_topic: Topic,
    boost_factor: f64,
) -> (Vec<Document>, Vec<RetrievalEvent>) {
    let mut events = Vec::new();
    let boosted = candidates
        .into_iter()
        .map(|doc| {
            if doc.topic != Some(query_topic) {
                return doc;
            }
            let boosted_score = doc.score + boost_factor;
            events.push(RetrievalEvent::TopicBoostApplied {
                query_topic,
                doc_topic: query_topic,
                original_score: doc.score,
                boosted_score,
            });
            doc.with_score(boosted_score)
        })
        .collect();
    (boosted, events)
}
