use proptest::prelude::*;
use solace_storage::{IndexedChunk, InMemoryVectorIndex};

const DIMS: usize = 4;

fn vector() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..1.0, DIMS)
}

fn index_with(vectors: Vec<Vec<f32>>) -> InMemoryVectorIndex {
    let index = InMemoryVectorIndex::new(DIMS);
    let chunks = vectors
        .into_iter()
        .enumerate()
        .map(|(i, v)| IndexedChunk::new(format!("c{i}"), format!("chunk {i}"), v))
        .collect();
    index.insert_batch(chunks).unwrap();
    index
}

proptest! {
    #[test]
    fn search_respects_k_threshold_and_order(
        vectors in prop::collection::vec(vector(), 0..40),
        query in vector(),
        threshold in -1.0f64..1.0,
        k in 0usize..15,
    ) {
        let index = index_with(vectors);
        let docs = index.search_sync(&query, threshold, k).unwrap();
        prop_assert!(docs.len() <= k);
        prop_assert!(docs.iter().all(|d| d.score >= threshold));
        prop_assert!(docs.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn scores_are_valid_cosines(
        vectors in prop::collection::vec(vector(), 1..20),
        query in vector(),
    ) {
        let index = index_with(vectors);
        for d in index.search_sync(&query, -2.0, 20).unwrap() {
            prop_assert!(d.score >= -1.0 - 1e-9 && d.score <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn batch_insert_counts_unique_ids(n in 0usize..350) {
        let index = InMemoryVectorIndex::new(DIMS);
        let chunks = (0..n)
            .map(|i| IndexedChunk::new(format!("c{i}"), "x", vec![1.0, 0.0, 0.0, 0.0]))
            .collect();
        prop_assert_eq!(index.insert_batch(chunks).unwrap(), n);
        prop_assert_eq!(index.len(), n);
    }
}
