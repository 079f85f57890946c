//! Query volume, per-topic distribution, boost activity, failures by kind.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use solace_core::models::RetrievalEvent;
use solace_core::topic::Topic;

/// Tracks retrieval counters, fed from `RetrievalEvent`s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalMetrics {
    pub queries_total: u64,
    /// Query counts keyed by inferred topic label ("none" when no topic).
    pub queries_by_topic: BTreeMap<String, u64>,
    pub candidates_examined: u64,
    pub boosts_applied: u64,
    pub documents_returned: u64,
    /// Completed retrievals that returned nothing.
    pub empty_results: u64,
    pub failures_by_kind: BTreeMap<String, u64>,
}

impl RetrievalMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the counters.
    pub fn record_event(&mut self, event: &RetrievalEvent) {
        match event {
            RetrievalEvent::QueryTopicInferred { inferred_topic, .. } => {
                self.queries_total += 1;
                *self
                    .queries_by_topic
                    .entry(Topic::label_or_none(*inferred_topic).to_string())
                    .or_default() += 1;
            }
            RetrievalEvent::VectorSearchComplete {
                candidates_found, ..
            } => {
                self.candidates_examined += *candidates_found as u64;
            }
            RetrievalEvent::TopicBoostApplied { .. } => {
                self.boosts_applied += 1;
            }
            RetrievalEvent::RetrievalComplete { final_count, .. } => {
                self.documents_returned += *final_count as u64;
                if *final_count == 0 {
                    self.empty_results += 1;
                }
            }
            RetrievalEvent::RetrievalFailed { kind, .. } => {
                *self.failures_by_kind.entry(kind.clone()).or_default() += 1;
            }
        }
    }

    pub fn failures_total(&self) -> u64 {
        self.failures_by_kind.values().sum()
    }

    /// Share of queries whose topic was inferred as `topic`.
    pub fn topic_share(&self, topic: Option<Topic>) -> f64 {
        if self.queries_total == 0 {
            return 0.0;
        }
        let n = self
            .queries_by_topic
            .get(Topic::label_or_none(topic))
            .copied()
            .unwrap_or(0);
        n as f64 / self.queries_total as f64
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inferred(topic: Option<Topic>) -> RetrievalEvent {
        RetrievalEvent::QueryTopicInferred {
            query: "q".to_string(),
            inferred_topic: topic,
        }
    }

    #[test]
    fn counts_queries_by_topic() {
        let mut m = RetrievalMetrics::new();
        m.record_event(&inferred(Some(Topic::Anxiety)));
        m.record_event(&inferred(Some(Topic::Anxiety)));
        m.record_event(&inferred(None));
        m.record_event(&inferred(Some(Topic::Cbt)));
        assert_eq!(m.queries_total, 4);
        assert_eq!(m.queries_by_topic["anxiety"], 2);
        assert_eq!(m.topic_share(Some(Topic::Anxiety)), 0.5);
        assert_eq!(m.topic_share(None), 0.25);
    }

    #[test]
    fn counts_completion_and_failures() {
        let mut m = RetrievalMetrics::new();
        m.record_event(&RetrievalEvent::RetrievalComplete {
            query_topic: None,
            final_count: 0,
            scores: vec![],
            topics: vec![],
        });
        m.record_event(&RetrievalEvent::RetrievalComplete {
            query_topic: Some(Topic::Stress),
            final_count: 3,
            scores: vec![0.9, 0.8, 0.7],
            topics: vec![Some(Topic::Stress), None, None],
        });
        m.record_event(&RetrievalEvent::RetrievalFailed {
            kind: "embedding_unavailable".to_string(),
            reason: "timeout".to_string(),
        });
        assert_eq!(m.empty_results, 1);
        assert_eq!(m.documents_returned, 3);
        assert_eq!(m.failures_total(), 1);
        assert_eq!(m.failures_by_kind["embedding_unavailable"], 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut m = RetrievalMetrics::new();
        m.record_event(&inferred(None));
        m.reset();
        assert_eq!(m, RetrievalMetrics::default());
    }
}
