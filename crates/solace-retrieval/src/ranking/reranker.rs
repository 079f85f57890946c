//! Topic-aware re-ranking of the candidate pool.

use std::cmp::Ordering;

use solace_core::models::{Document, RetrievalEvent};
use solace_core::topic::Topic;

use super::{booster, deduplication};

/// Re-rank candidates for a query topic and cut to `top_k`.
///
/// - Duplicate ids are dropped first (first occurrence kept).
/// - With no query topic the input order is kept and simply truncated.
/// - Otherwise matching documents are boosted, then everything is stably
///   sorted by descending score (ties keep input order) and truncated.
///
/// Returns the ranked documents plus the `TopicBoostApplied` events produced,
/// for the caller to forward to an observer.
pub fn rerank(
    candidates: Vec<Document>,
    query_topic: Option<Topic>,
    boost_factor: f64,
    top_k: usize,
) -> (Vec<Document>, Vec<RetrievalEvent>) {
    let mut candidates = deduplication::deduplicate(candidates);

    let Some(topic) = query_topic else {
        candidates.truncate(top_k);
        return (candidates, Vec::new());
    };

    let (mut boosted, events) = booster::boost(candidates, topic, boost_factor);
    // sort_by is stable, so ties keep input order.
    boosted.sort_by(|a, b| descending(a.score, b.score));
    boosted.truncate(top_k);
    (boosted, events)
}

/// Total descending order on scores. NaN sorts after every number.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.total_cmp(&a),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}
