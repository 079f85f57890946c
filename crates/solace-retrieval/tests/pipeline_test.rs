//! End-to-end retrieval over the local hashing embedder and in-memory index.

use std::sync::Arc;

use solace_core::config::{ObservabilityConfig, RetrievalConfig, SolaceConfig};
use solace_core::topic::Topic;
use solace_core::traits::{IEmbeddingProvider, IRetriever};
use solace_embeddings::HashingEmbeddingProvider;
use solace_observability::{InstrumentedRetriever, MetricsObserver};
use solace_retrieval::RetrievalEngine;
use solace_storage::{IndexedChunk, InMemoryVectorIndex};

const DIMS: usize = 256;

const CORPUS: &[(&str, Topic, &str)] = &[
    ("anx-1", Topic::Anxiety, "Panic attacks pass. Name five things you can see to ground yourself."),
    ("anx-2", Topic::Anxiety, "Worry time: set aside fifteen minutes a day for anxious thoughts."),
    ("brt-1", Topic::Breathing, "Box breathing: breathe in for four, hold for four, breathe out for four."),
    ("brt-2", Topic::Breathing, "Slow exhale breathing calms the nervous system during panic."),
    ("dep-1", Topic::Depression, "Behavioural activation: schedule one small rewarding task when feeling down."),
    ("str-1", Topic::Stress, "When work feels like too much, list tasks and pick the smallest first."),
    ("cbt-1", Topic::Cbt, "Negative thoughts can be examined: what is the evidence for and against?"),
];

async fn seeded_index(provider: &HashingEmbeddingProvider) -> Arc<InMemoryVectorIndex> {
    let index = Arc::new(InMemoryVectorIndex::new(DIMS));
    let mut chunks = Vec::new();
    for (id, topic, text) in CORPUS {
        let embedding = provider.embed(text).await.unwrap();
        chunks.push(IndexedChunk::new(*id, *text, embedding).with_topic(*topic));
    }
    index.insert_batch(chunks).unwrap();
    index
}

fn config() -> RetrievalConfig {
    RetrievalConfig {
        top_k: 3,
        similarity_threshold: 0.0,
        ..Default::default()
    }
}

#[tokio::test]
async fn anxiety_query_surfaces_anxiety_chunks_first() {
    let provider = HashingEmbeddingProvider::new(DIMS);
    let index = seeded_index(&provider).await;
    let engine = RetrievalEngine::new(Arc::new(provider), index, config()).unwrap();

    let result = engine.retrieve("I keep having panic attacks").await.unwrap();
    assert_eq!(result.query_topic, Some(Topic::Anxiety));
    assert!(result.len() <= 3);
    assert_eq!(result.documents[0].topic, Some(Topic::Anxiety));

    // Strictly descending or equal.
    let scores = result.scores();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn same_inputs_give_same_output() {
    let provider = HashingEmbeddingProvider::new(DIMS);
    let index = seeded_index(&provider).await;
    let engine = RetrievalEngine::new(Arc::new(provider), index, config()).unwrap();

    let a = engine.retrieve("how do I calm my breathing").await.unwrap();
    let b = engine.retrieve("how do I calm my breathing").await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn high_threshold_gives_empty_result() {
    let provider = HashingEmbeddingProvider::new(DIMS);
    let index = seeded_index(&provider).await;
    let engine = RetrievalEngine::new(
        Arc::new(provider),
        index,
        RetrievalConfig {
            similarity_threshold: 0.999,
            ..config()
        },
    )
    .unwrap();

    let result = engine.retrieve("completely unrelated gardening question").await.unwrap();
    assert!(result.is_empty());
    assert!(result.context_block().is_empty());
}

#[tokio::test]
async fn concurrent_queries_share_one_engine() {
    let provider = HashingEmbeddingProvider::new(DIMS);
    let index = seeded_index(&provider).await;
    let engine = Arc::new(RetrievalEngine::new(Arc::new(provider), index, config()).unwrap());

    let queries = ["panic attacks", "feeling down", "negative thoughts", "box breathing"];
    let handles: Vec<_> = queries
        .iter()
        .map(|q| {
            let engine = engine.clone();
            let q = q.to_string();
            tokio::spawn(async move { engine.retrieve(&q).await })
        })
        .collect();

    for (handle, q) in handles.into_iter().zip(queries) {
        let concurrent = handle.await.unwrap().unwrap();
        let sequential = engine.retrieve(q).await.unwrap();
        assert_eq!(concurrent, sequential);
    }
}

#[tokio::test]
async fn instrumented_engine_logs_latency() {
    let provider = HashingEmbeddingProvider::new(DIMS);
    let index = seeded_index(&provider).await;
    let metrics = Arc::new(MetricsObserver::from_config(&ObservabilityConfig::default()));
    let engine = RetrievalEngine::new(Arc::new(provider), index, config())
        .unwrap()
        .with_observer(metrics.clone());
    let retriever = InstrumentedRetriever::new(engine, metrics.clone());

    retriever.retrieve("I am so stressed about work").await.unwrap();
    retriever.retrieve("tell me a joke").await.unwrap();

    let counters = metrics.metrics();
    assert_eq!(counters.queries_total, 2);
    assert_eq!(counters.queries_by_topic["stress"], 1);
    assert_eq!(counters.queries_by_topic["none"], 1);
    assert_eq!(metrics.query_log().count(), 2);
}

#[tokio::test]
async fn build_from_default_config_runs() {
    let engine = RetrievalEngine::build(&SolaceConfig::default()).unwrap();
    let result = engine.retrieve("cbt for negative thoughts").await.unwrap();
    assert_eq!(result.query_topic, Some(Topic::Cbt));
    assert!(result.is_empty());
}
