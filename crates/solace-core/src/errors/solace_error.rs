use super::{ConfigError, EmbeddingError, RetrievalError, SearchError};

/// Top-level error for the Solace workspace.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum SolaceError {
    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("search error: {0}")]
    SearchError(#[from] SearchError),

    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SolaceError {
    /// Whether this error means the retrieval subsystem could not produce a
    /// ranked result (as opposed to producing an empty one).
    pub fn is_retrieval_unavailable(&self) -> bool {
        matches!(self, SolaceError::RetrievalError(e) if e.is_unavailable())
    }
}

pub type SolaceResult<T> = Result<T, SolaceError>;
