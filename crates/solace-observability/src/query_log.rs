//! Query performance logging: topic, latency, result count, outcome.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use solace_core::config::defaults::DEFAULT_QUERY_LOG_CAPACITY;
use solace_core::topic::Topic;

/// A single query log entry.
///
/// Query text is stored only as its length; user messages do not belong in
/// a metrics buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub query_len: usize,
    pub query_topic: Option<Topic>,
    pub latency: Duration,
    pub result_count: usize,
    /// Error kind when the retrieval failed.
    pub error_kind: Option<String>,
    pub timestamp_epoch_ms: i64,
}

impl QueryLogEntry {
    /// Entry for a retrieval that produced a result.
    pub fn success(
        query: &str,
        query_topic: Option<Topic>,
        latency: Duration,
        result_count: usize,
    ) -> Self {
        Self {
            query_len: query.chars().count(),
            query_topic,
            latency,
            result_count,
            error_kind: None,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Entry for a retrieval that failed.
    pub fn failure(query: &str, latency: Duration, error_kind: impl Into<String>) -> Self {
        Self {
            query_len: query.chars().count(),
            query_topic: None,
            latency,
            result_count: 0,
            error_kind: Some(error_kind.into()),
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error_kind.is_none()
    }
}

/// Bounded query log; the oldest entries are evicted first.
#[derive(Debug, Clone)]
pub struct QueryLog {
    entries: VecDeque<QueryLogEntry>,
    max_entries: usize,
}

impl Default for QueryLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_QUERY_LOG_CAPACITY)
    }
}

impl QueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom capacity.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    /// Record a query.
    pub fn record(&mut self, entry: QueryLogEntry) {
        tracing::debug!(
            event = "query_logged",
            query_len = entry.query_len,
            topic = Topic::label_or_none(entry.query_topic),
            latency_ms = entry.latency.as_millis() as u64,
            result_count = entry.result_count,
            error_kind = entry.error_kind.as_deref().unwrap_or("none"),
            "query logged"
        );

        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() == self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &QueryLogEntry> {
        self.entries.iter()
    }

    /// Average latency across all logged queries.
    pub fn avg_latency(&self) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.entries.iter().map(|e| e.latency).sum();
        total / self.entries.len() as u32
    }

    /// Latency at the given percentile (0.0–1.0), nearest-rank.
    pub fn latency_percentile(&self, p: f64) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let mut latencies: Vec<Duration> = self.entries.iter().map(|e| e.latency).collect();
        latencies.sort();
        let p = p.clamp(0.0, 1.0);
        let idx = ((p * (latencies.len() - 1) as f64).round() as usize).min(latencies.len() - 1);
        latencies[idx]
    }

    /// Share of logged queries that returned no documents (failures included).
    pub fn empty_rate(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let empty = self.entries.iter().filter(|e| e.result_count == 0).count();
        empty as f64 / self.entries.len() as f64
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
