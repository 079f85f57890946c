//! RetrievalEngine: implements IRetriever, orchestrates the retrieval pipeline.
//!
//! query → topic inference → embed → over-fetch search → boost + rerank → top-k

use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use solace_core::config::{RetrievalConfig, SolaceConfig};
use solace_core::errors::{RetrievalError, SolaceError, SolaceResult};
use solace_core::models::{RetrievalEvent, RetrievalResult};
use solace_core::topic::Topic;
use solace_core::traits::{
    IEmbeddingProvider, IRetrievalObserver, IRetriever, IVectorSearch, NoopObserver,
};
use solace_embeddings::EmbeddingEngine;
use solace_observability::{embedding_span, retrieval_span, search_span};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn, Instrument};

use crate::expansion::candidate_count;
use crate::ranking::rerank;
use crate::topic::TopicClassifier;

/// The retrieval engine.
///
/// Holds only read-only state after construction, so one instance can be
/// shared behind an `Arc` across concurrent requests.
pub struct RetrievalEngine {
    embedder: Arc<dyn IEmbeddingProvider>,
    search: Arc<dyn IVectorSearch>,
    observer: Arc<dyn IRetrievalObserver>,
    classifier: TopicClassifier,
    config: RetrievalConfig,
}

impl RetrievalEngine {
    /// Engine with the built-in topic table and no observer.
    ///
    /// Fails with `ConfigError::ValidationFailed` when `config` is invalid.
    pub fn new(
        embedder: Arc<dyn IEmbeddingProvider>,
        search: Arc<dyn IVectorSearch>,
        config: RetrievalConfig,
    ) -> SolaceResult<Self> {
        config.validate()?;
        Ok(Self {
            embedder,
            search,
            observer: Arc::new(NoopObserver),
            classifier: TopicClassifier::builtin().clone(),
            config,
        })
    }

    /// Validate `config`, compile its topic table, and wire the collaborators.
    pub fn from_config(
        config: &SolaceConfig,
        embedder: Arc<dyn IEmbeddingProvider>,
        search: Arc<dyn IVectorSearch>,
    ) -> SolaceResult<Self> {
        config.validate()?;
        let classifier = TopicClassifier::from_config(&config.topics)?;
        info!(
            top_k = config.retrieval.top_k,
            candidates = candidate_count(&config.retrieval),
            boost = config.retrieval.topic_boost_factor,
            threshold = config.retrieval.similarity_threshold,
            topics = classifier.rule_count(),
            embedder = embedder.name(),
            search = search.name(),
            "RetrievalEngine initialized"
        );
        Ok(Self::new(embedder, search, config.retrieval.clone())?.with_classifier(classifier))
    }

    /// Build the configured embedding provider and vector store, then wire
    /// the engine around them.
    pub fn build(config: &SolaceConfig) -> SolaceResult<Self> {
        config.validate()?;
        let embedder: Arc<dyn IEmbeddingProvider> =
            Arc::new(EmbeddingEngine::new(&config.embedding)?);
        let search =
            solace_storage::create_vector_search(&config.vector_store, config.embedding.dimensions)?;
        Self::from_config(config, embedder, search)
    }

    pub fn with_observer(mut self, observer: Arc<dyn IRetrievalObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_classifier(mut self, classifier: TopicClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Topic the engine would infer for `query`.
    pub fn infer_topic(&self, query: &str) -> Option<Topic> {
        self.classifier.infer(query)
    }

    /// Run the full pipeline for `query`.
    pub async fn retrieve(&self, query: &str) -> SolaceResult<RetrievalResult> {
        self.run(query).await
    }

    /// Like [`retrieve`](Self::retrieve), but aborts the in-flight collaborator
    /// call as soon as `token` fires and returns `RetrievalError::Cancelled`.
    pub async fn retrieve_with_cancel(
        &self,
        query: &str,
        token: &CancellationToken,
    ) -> SolaceResult<RetrievalResult> {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(self.fail(RetrievalError::Cancelled)),
            result = self.run(query) => result,
        }
    }

    async fn run(&self, query: &str) -> SolaceResult<RetrievalResult> {
        let query_topic = self.classifier.infer(query);
        let span = retrieval_span!(query.chars().count(), Topic::label_or_none(query_topic));

        async move {
            debug!(topic = Topic::label_or_none(query_topic), "inferred query topic");
            self.emit(RetrievalEvent::QueryTopicInferred {
                query: query.to_string(),
                inferred_topic: query_topic,
            });

            // Embed.
            let embedding = bounded(
                self.config.embedding_timeout_ms,
                self.embedder
                    .embed(query)
                    .instrument(embedding_span!(self.embedder.name(), self.embedder.dimensions())),
            )
            .await
            .map_err(|reason| self.fail(RetrievalError::EmbeddingUnavailable { reason }))?;

            // Over-fetch candidates.
            let k = candidate_count(&self.config);
            let threshold = self.config.similarity_threshold;
            let candidates = bounded(
                self.config.search_timeout_ms,
                self.search
                    .search(&embedding, threshold, k)
                    .instrument(search_span!(self.search.name(), k, threshold)),
            )
            .await
            .map_err(|reason| self.fail(RetrievalError::SearchUnavailable { reason }))?;

            let candidates_examined = candidates.len();
            debug!(candidates = candidates_examined, k, "vector search returned candidates");
            self.emit(RetrievalEvent::VectorSearchComplete {
                candidates_found: candidates_examined,
                candidates_requested: k,
                threshold,
            });

            // Boost and rerank.
            let (documents, boosts) = rerank(
                candidates,
                query_topic,
                self.config.topic_boost_factor,
                self.config.top_k,
            );
            for event in boosts {
                self.emit(event);
            }

            let result = RetrievalResult {
                documents,
                query_topic,
                candidates_examined,
            };
            self.emit(RetrievalEvent::RetrievalComplete {
                query_topic,
                final_count: result.len(),
                scores: result.scores(),
                topics: result.topics(),
            });

            info!(
                topic = Topic::label_or_none(query_topic),
                candidates = candidates_examined,
                returned = result.len(),
                "retrieval complete"
            );
            Ok(result)
        }
        .instrument(span)
        .await
    }

    /// Hand an event to the observer. A panicking observer is contained
    /// and logged; it never reaches the caller.
    fn emit(&self, event: RetrievalEvent) {
        let observer = &self.observer;
        if catch_unwind(AssertUnwindSafe(|| observer.on_event(&event))).is_err() {
            warn!(event = event.name(), "retrieval observer panicked, event dropped");
        }
    }

    fn fail(&self, error: RetrievalError) -> SolaceError {
        warn!(kind = error.kind(), error = %error, "retrieval failed");
        self.emit(RetrievalEvent::RetrievalFailed {
            kind: error.kind().to_string(),
            reason: error.to_string(),
        });
        error.into()
    }
}

/// Await `fut` for at most `timeout_ms`. Collaborator errors and timeouts
/// both come back as a reason string.
async fn bounded<T, F>(timeout_ms: u64, fut: F) -> Result<T, String>
where
    F: Future<Output = SolaceResult<T>>,
{
    match tokio::time::timeout(Duration::from_millis(timeout_ms), fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err(format!("timed out after {timeout_ms}ms")),
    }
}

#[async_trait]
impl IRetriever for RetrievalEngine {
    async fn retrieve(&self, query: &str) -> SolaceResult<RetrievalResult> {
        self.run(query).await
    }
}
