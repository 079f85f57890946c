use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::SolaceResult;
use crate::models::Document;

/// Similarity search over stored chunk embeddings.
#[async_trait]
pub trait IVectorSearch: Send + Sync {
    /// Return at most `k` documents with similarity >= `threshold`,
    /// ordered by descending similarity. Zero results is not an error.
    async fn search(
        &self,
        embedding: &[f32],
        threshold: f64,
        k: usize,
    ) -> SolaceResult<Vec<Document>>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: IVectorSearch + ?Sized> IVectorSearch for Arc<T> {
    async fn search(
        &self,
        embedding: &[f32],
        threshold: f64,
        k: usize,
    ) -> SolaceResult<Vec<Document>> {
        (**self).search(embedding, threshold, k).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
