/// Retrieval orchestration errors.
///
/// "No documents matched" is never an error; it is an empty result.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("embedding unavailable: {reason}")]
    EmbeddingUnavailable { reason: String },

    #[error("vector search unavailable: {reason}")]
    SearchUnavailable { reason: String },

    #[error("retrieval cancelled")]
    Cancelled,
}

impl RetrievalError {
    /// True for the collaborator-failure variants.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            RetrievalError::EmbeddingUnavailable { .. } | RetrievalError::SearchUnavailable { .. }
        )
    }

    /// Short machine-readable kind, used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            RetrievalError::EmbeddingUnavailable { .. } => "embedding_unavailable",
            RetrievalError::SearchUnavailable { .. } => "search_unavailable",
            RetrievalError::Cancelled => "cancelled",
        }
    }
}
