use std::sync::RwLock;

use async_trait::async_trait;
use solace_core::constants::{INSERT_BATCH_SIZE, METADATA_TOPIC_KEY};
use solace_core::errors::{SearchError, SolaceResult};
use solace_core::models::{Document, Metadata};
use solace_core::topic::Topic;
use solace_core::traits::IVectorSearch;
use tracing::debug;

use super::similarity::cosine_similarity;

/// A stored chunk with its embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedChunk {
    pub id: String,
    pub content: String,
    pub metadata: Metadata,
    pub embedding: Vec<f32>,
}

impl IndexedChunk {
    pub fn new(id: impl Into<String>, content: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            metadata: Metadata::new(),
            embedding,
        }
    }

    /// Tag the chunk with a topic label in its metadata.
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.metadata.insert(
            METADATA_TOPIC_KEY.to_string(),
            serde_json::Value::String(topic.as_str().to_string()),
        );
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    fn to_document(&self, score: f64) -> Document {
        let topic = self
            .metadata
            .get(METADATA_TOPIC_KEY)
            .and_then(|v| v.as_str())
            .and_then(Topic::from_label);
        let mut doc = Document::new(self.id.clone(), self.content.clone(), score).with_topic(topic);
        doc.metadata = self.metadata.clone();
        doc
    }
}

/// Brute-force cosine index guarded by an `RwLock`.
///
/// Searches take the read lock, so concurrent queries never block each other.
/// Results are ordered by descending similarity; equal scores keep insertion
/// order.
pub struct InMemoryVectorIndex {
    dimensions: usize,
    chunks: RwLock<Vec<IndexedChunk>>,
}

impl InMemoryVectorIndex {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            chunks: RwLock::new(Vec::new()),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Insert or replace a chunk by id.
    pub fn insert(&self, chunk: IndexedChunk) -> SolaceResult<()> {
        self.check_dimensions(&chunk.embedding)?;
        let mut chunks = self.chunks.write().map_err(|_| SearchError::LockPoisoned)?;
        upsert(&mut chunks, chunk);
        Ok(())
    }

    /// Insert many chunks, taking the write lock once per batch of
    /// `INSERT_BATCH_SIZE`. All chunks are validated before anything is written.
    ///
    /// Returns the number of chunks written.
    pub fn insert_batch(&self, batch: Vec<IndexedChunk>) -> SolaceResult<usize> {
        for chunk in &batch {
            self.check_dimensions(&chunk.embedding)?;
        }
        let total = batch.len();
        let mut iter = batch.into_iter().peekable();
        let mut batches = 0usize;
        while iter.peek().is_some() {
            let mut chunks = self.chunks.write().map_err(|_| SearchError::LockPoisoned)?;
            for chunk in iter.by_ref().take(INSERT_BATCH_SIZE) {
                upsert(&mut chunks, chunk);
            }
            batches += 1;
        }
        debug!(total, batches, "chunks inserted into memory index");
        Ok(total)
    }

    /// Remove a chunk by id. Returns whether it existed.
    pub fn remove(&self, id: &str) -> SolaceResult<bool> {
        let mut chunks = self.chunks.write().map_err(|_| SearchError::LockPoisoned)?;
        let before = chunks.len();
        chunks.retain(|c| c.id != id);
        Ok(chunks.len() != before)
    }

    /// Drop every chunk.
    pub fn clear(&self) -> SolaceResult<()> {
        self.chunks
            .write()
            .map_err(|_| SearchError::LockPoisoned)?
            .clear();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.chunks.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Synchronous search used by the `IVectorSearch` impl.
    pub fn search_sync(
        &self,
        embedding: &[f32],
        threshold: f64,
        k: usize,
    ) -> SolaceResult<Vec<Document>> {
        if embedding.len() != self.dimensions {
            return Err(SearchError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            }
            .into());
        }
        if k == 0 {
            return Ok(Vec::new());
        }

        let chunks = self.chunks.read().map_err(|_| SearchError::LockPoisoned)?;
        let mut scored: Vec<(f64, &IndexedChunk)> = chunks
            .iter()
            .map(|c| (cosine_similarity(embedding, &c.embedding), c))
            .filter(|(score, _)| *score >= threshold)
            .collect();

        // NaN never passes the threshold filter. sort_by is stable: ties
        // keep insertion order.
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(k);

        Ok(scored
            .into_iter()
            .map(|(score, chunk)| chunk.to_document(score))
            .collect())
    }

    fn check_dimensions(&self, embedding: &[f32]) -> SolaceResult<()> {
        if embedding.len() != self.dimensions {
            return Err(SearchError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            }
            .into());
        }
        Ok(())
    }
}

fn upsert(chunks: &mut Vec<IndexedChunk>, chunk: IndexedChunk) {
    match chunks.iter_mut().find(|c| c.id == chunk.id) {
        Some(existing) => *existing = chunk,
        None => chunks.push(chunk),
    }
}

#[async_trait]
impl IVectorSearch for InMemoryVectorIndex {
    async fn search(
        &self,
        embedding: &[f32],
        threshold: f64,
        k: usize,
    ) -> SolaceResult<Vec<Document>> {
        self.search_sync(embedding, threshold, k)
    }

    fn name(&self) -> &str {
        "memory"
    }
}
