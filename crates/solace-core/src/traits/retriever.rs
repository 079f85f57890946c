use async_trait::async_trait;

use crate::errors::SolaceResult;
use crate::models::RetrievalResult;

/// Topic-aware document retrieval for a free-text query.
#[async_trait]
pub trait IRetriever: Send + Sync {
    /// Retrieve ranked documents. An empty result means nothing relevant was
    /// found; an error means the retrieval subsystem could not answer.
    async fn retrieve(&self, query: &str) -> SolaceResult<RetrievalResult>;
}
