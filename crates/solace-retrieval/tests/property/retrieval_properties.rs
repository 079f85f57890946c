use proptest::prelude::*;
use solace_core::models::Document;
use solace_core::topic::Topic;
use solace_retrieval::{infer_topic, rerank};

fn topic_strategy() -> impl Strategy<Value = Option<Topic>> {
    prop_oneof![
        Just(None),
        Just(Some(Topic::Depression)),
        Just(Some(Topic::Anxiety)),
        Just(Some(Topic::Stress)),
        Just(Some(Topic::Breathing)),
        Just(Some(Topic::Cbt)),
        Just(Some(Topic::General)),
    ]
}

/// Candidates with unique ids, scores in [0, 1].
fn candidates_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec((0.0f64..=1.0, topic_strategy()), 0..30).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (score, topic))| {
                Document::new(format!("doc-{i}"), format!("chunk {i}"), score).with_topic(topic)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn output_is_bounded_subset(
        docs in candidates_strategy(),
        topic in topic_strategy(),
        boost in -1.0f64..1.0,
        top_k in 1usize..12,
    ) {
        let (out, _) = rerank(docs.clone(), topic, boost, top_k);
        prop_assert!(out.len() <= top_k);
        prop_assert_eq!(out.len(), docs.len().min(top_k));
        for d in &out {
            prop_assert!(docs.iter().any(|c| c.id == d.id));
        }
    }

    #[test]
    fn output_ids_are_unique(
        docs in candidates_strategy(),
        topic in topic_strategy(),
        top_k in 1usize..40,
    ) {
        // Feed every candidate twice.
        let mut doubled = docs.clone();
        doubled.extend(docs);
        let (out, _) = rerank(doubled, topic, 0.15, top_k);
        let mut ids: Vec<&str> = out.iter().map(|d| d.id.as_str()).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), before);
    }

    #[test]
    fn with_topic_output_is_descending(
        docs in candidates_strategy(),
        topic in topic_strategy().prop_filter("needs a topic", |t| t.is_some()),
        boost in -1.0f64..1.0,
        top_k in 1usize..12,
    ) {
        let (out, _) = rerank(docs, topic, boost, top_k);
        prop_assert!(out.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn boosted_scores_are_exact_sums(
        docs in candidates_strategy(),
        topic in topic_strategy().prop_filter("needs a topic", |t| t.is_some()),
        boost in -1.0f64..1.0,
    ) {
        let top_k = docs.len().max(1);
        let (out, events) = rerank(docs.clone(), topic, boost, top_k);
        let matching = docs.iter().filter(|d| d.topic == topic).count();
        prop_assert_eq!(events.len(), matching);
        for d in &out {
            let original = docs.iter().find(|c| c.id == d.id).unwrap();
            if original.topic == topic {
                prop_assert_eq!(d.score, original.score + boost);
            } else {
                prop_assert_eq!(d.score, original.score);
            }
        }
    }

    #[test]
    fn no_topic_is_identity_truncation(
        docs in candidates_strategy(),
        boost in -1.0f64..1.0,
        top_k in 1usize..12,
    ) {
        let (out, events) = rerank(docs.clone(), None, boost, top_k);
        prop_assert!(events.is_empty());
        prop_assert_eq!(out, docs.into_iter().take(top_k).collect::<Vec<_>>());
    }

    #[test]
    fn equal_scores_keep_input_order(
        n in 1usize..20,
        score in 0.0f64..1.0,
        topic in topic_strategy(),
    ) {
        let docs: Vec<Document> = (0..n)
            .map(|i| Document::new(format!("d{i}"), "x", score).with_topic(topic))
            .collect();
        let (out, _) = rerank(docs.clone(), topic, 0.15, n);
        let got: Vec<&str> = out.iter().map(|d| d.id.as_str()).collect();
        let want: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn rerank_is_deterministic(
        docs in candidates_strategy(),
        topic in topic_strategy(),
        boost in -1.0f64..1.0,
        top_k in 1usize..12,
    ) {
        let a = rerank(docs.clone(), topic, boost, top_k);
        let b = rerank(docs, topic, boost, top_k);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn infer_topic_never_panics(s in ".{0,200}") {
        let _ = infer_topic(&s);
    }

    #[test]
    fn infer_topic_ignores_case(s in "[a-zA-Z ]{0,60}") {
        prop_assert_eq!(infer_topic(&s), infer_topic(&s.to_uppercase()));
    }
}
