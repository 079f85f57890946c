//! Latency instrumentation around any `IRetriever`.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use solace_core::errors::{SolaceError, SolaceResult};
use solace_core::models::RetrievalResult;
use solace_core::traits::IRetriever;

use crate::observers::MetricsObserver;

/// Wraps a retriever and records each call's latency and outcome into a
/// [`MetricsObserver`]'s query log. The inner result is returned untouched.
pub struct InstrumentedRetriever<R> {
    inner: R,
    metrics: Arc<MetricsObserver>,
}

impl<R: IRetriever> InstrumentedRetriever<R> {
    pub fn new(inner: R, metrics: Arc<MetricsObserver>) -> Self {
        Self { inner, metrics }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn metrics(&self) -> &Arc<MetricsObserver> {
        &self.metrics
    }
}

#[async_trait]
impl<R: IRetriever> IRetriever for InstrumentedRetriever<R> {
    async fn retrieve(&self, query: &str) -> SolaceResult<RetrievalResult> {
        let start = Instant::now();
        let outcome = self.inner.retrieve(query).await;
        let latency = start.elapsed();
        match &outcome {
            Ok(result) => {
                self.metrics
                    .record_query(query, result.query_topic, latency, result.len())
            }
            Err(e) => self.metrics.record_failure(query, latency, error_kind(e)),
        }
        outcome
    }
}

fn error_kind(err: &SolaceError) -> &'static str {
    match err {
        SolaceError::RetrievalError(e) => e.kind(),
        SolaceError::EmbeddingError(_) => "embedding_error",
        SolaceError::SearchError(_) => "search_error",
        SolaceError::ConfigError(_) => "config_error",
        SolaceError::SerializationError(_) => "serialization_error",
    }
}
