/// Vector search errors.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search request to {backend} failed: {reason}")]
    RequestFailed { backend: String, reason: String },

    #[error("invalid search response: {reason}")]
    InvalidResponse { reason: String },

    #[error("dimension mismatch: index holds {expected}-dim vectors, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("search backend {backend} timed out after {timeout_ms}ms")]
    Timeout { backend: String, timeout_ms: u64 },

    #[error("index lock poisoned")]
    LockPoisoned,
}
