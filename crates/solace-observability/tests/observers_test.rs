use std::sync::Arc;
use std::time::Duration;

use solace_core::models::RetrievalEvent;
use solace_core::topic::Topic;
use solace_core::traits::IRetrievalObserver;
use solace_observability::{
    CompositeObserver, MetricsObserver, NoopObserver, RecordingObserver, TracingObserver,
};

fn sample_run() -> Vec<RetrievalEvent> {
    vec![
        RetrievalEvent::QueryTopicInferred {
            query: "box breathing please".to_string(),
            inferred_topic: Some(Topic::Breathing),
        },
        RetrievalEvent::VectorSearchComplete {
            candidates_found: 6,
            candidates_requested: 9,
            threshold: 0.4,
        },
        RetrievalEvent::TopicBoostApplied {
            query_topic: Topic::Breathing,
            doc_topic: Topic::Breathing,
            original_score: 0.62,
            boosted_score: 0.77,
        },
        RetrievalEvent::RetrievalComplete {
            query_topic: Some(Topic::Breathing),
            final_count: 3,
            scores: vec![0.77, 0.74, 0.70],
            topics: vec![Some(Topic::Breathing), Some(Topic::Stress), None],
        },
    ]
}

#[test]
fn composite_feeds_every_sink() {
    let recorder = Arc::new(RecordingObserver::new());
    let metrics = Arc::new(MetricsObserver::default());
    let composite = CompositeObserver::new()
        .with(Arc::new(TracingObserver))
        .with(Arc::new(NoopObserver))
        .with(recorder.clone())
        .with(metrics.clone());

    let observer: Arc<dyn IRetrievalObserver> = Arc::new(composite);
    for event in sample_run() {
        observer.on_event(&event);
    }

    assert_eq!(recorder.events(), sample_run());
    let counters = metrics.metrics();
    assert_eq!(counters.queries_total, 1);
    assert_eq!(counters.candidates_examined, 6);
    assert_eq!(counters.boosts_applied, 1);
    assert_eq!(counters.documents_returned, 3);
    assert_eq!(counters.empty_results, 0);
}

#[test]
fn snapshot_reports_latency_summary() {
    let metrics = MetricsObserver::with_log_capacity(100);
    for ms in [10u64, 20, 30, 40, 100] {
        metrics.record_query("q", Some(Topic::Stress), Duration::from_millis(ms), 2);
    }
    let snapshot = metrics.snapshot();
    assert_eq!(snapshot["query_log_count"], 5);
    assert_eq!(snapshot["avg_latency_ms"], 40);
    assert_eq!(snapshot["p95_latency_ms"], 100);
    assert_eq!(snapshot["empty_rate"], 0.0);
}

#[test]
fn events_serialize_with_snake_case_tag() {
    let json = serde_json::to_value(&sample_run()[2]).unwrap();
    assert_eq!(json["event"], "topic_boost_applied");
    assert_eq!(json["query_topic"], "breathing");
}
