use std::sync::Mutex;
use std::time::Duration;

use solace_core::config::ObservabilityConfig;
use solace_core::models::RetrievalEvent;
use solace_core::topic::Topic;
use solace_core::traits::IRetrievalObserver;

use crate::metrics::RetrievalMetrics;
use crate::query_log::{QueryLog, QueryLogEntry};

/// Aggregates events into [`RetrievalMetrics`] and owns the [`QueryLog`].
///
/// Events update the counters. Latency is not part of any event, so the log
/// is fed through [`MetricsObserver::record_query`], which
/// [`crate::InstrumentedRetriever`] calls around each retrieval.
#[derive(Debug)]
pub struct MetricsObserver {
    metrics: Mutex<RetrievalMetrics>,
    query_log: Mutex<QueryLog>,
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new(QueryLog::default())
    }
}

impl MetricsObserver {
    pub fn new(query_log: QueryLog) -> Self {
        Self {
            metrics: Mutex::new(RetrievalMetrics::new()),
            query_log: Mutex::new(query_log),
        }
    }

    pub fn with_log_capacity(capacity: usize) -> Self {
        Self::new(QueryLog::with_capacity(capacity))
    }

    /// Observer whose query log is bounded by `query_log_capacity`.
    pub fn from_config(config: &ObservabilityConfig) -> Self {
        Self::with_log_capacity(config.query_log_capacity)
    }

    /// Log a successful retrieval.
    pub fn record_query(
        &self,
        query: &str,
        query_topic: Option<Topic>,
        latency: Duration,
        result_count: usize,
    ) {
        if let Ok(mut log) = self.query_log.lock() {
            log.record(QueryLogEntry::success(query, query_topic, latency, result_count));
        }
    }

    /// Log a failed retrieval.
    pub fn record_failure(&self, query: &str, latency: Duration, error_kind: &str) {
        if let Ok(mut log) = self.query_log.lock() {
            log.record(QueryLogEntry::failure(query, latency, error_kind));
        }
    }

    /// Snapshot of the counters.
    pub fn metrics(&self) -> RetrievalMetrics {
        self.metrics.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// Snapshot of the query log.
    pub fn query_log(&self) -> QueryLog {
        self.query_log.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Counters and latency summary as JSON.
    pub fn snapshot(&self) -> serde_json::Value {
        let log = self.query_log();
        serde_json::json!({
            "metrics": self.metrics(),
            "query_log_count": log.count(),
            "avg_latency_ms": log.avg_latency().as_millis() as u64,
            "p95_latency_ms": log.latency_percentile(0.95).as_millis() as u64,
            "empty_rate": log.empty_rate(),
        })
    }
}

impl IRetrievalObserver for MetricsObserver {
    fn on_event(&self, event: &RetrievalEvent) {
        if let Ok(mut metrics) = self.metrics.lock() {
            metrics.record_event(event);
        }
    }
}
