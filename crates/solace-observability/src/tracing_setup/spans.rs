//! Span definitions per operation: retrieval, embedding, search.

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($query_len:expr, $topic:expr) => {
        tracing::info_span!("solace.retrieval", query_len = $query_len, topic = %$topic)
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $dimension:expr) => {
        tracing::debug_span!("solace.embedding", provider = %$provider, dimension = $dimension)
    };
}

/// Create a vector search span.
#[macro_export]
macro_rules! search_span {
    ($backend:expr, $k:expr, $threshold:expr) => {
        tracing::debug_span!("solace.search", backend = %$backend, k = $k, threshold = $threshold)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RETRIEVAL: &str = "solace.retrieval";
    pub const EMBEDDING: &str = "solace.embedding";
    pub const SEARCH: &str = "solace.search";
}
