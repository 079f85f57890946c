/// Embedding subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("request to {provider} failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("invalid embedding response: {reason}")]
    InvalidResponse { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider {provider} timed out after {timeout_ms}ms")]
    Timeout { provider: String, timeout_ms: u64 },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },
}
