//! # solace-storage
//!
//! Vector search backends behind `IVectorSearch`.
//!
//! - [`InMemoryVectorIndex`]: thread-safe cosine index for tests and small corpora.
//! - [`SupabaseVectorClient`]: similarity search through a PostgREST RPC function
//!   backed by pgvector.

pub mod memory;
pub mod row;
pub mod supabase;

use std::sync::Arc;

use solace_core::config::VectorStoreConfig;
use solace_core::errors::{SearchError, SolaceResult};
use solace_core::traits::IVectorSearch;

pub use memory::{IndexedChunk, InMemoryVectorIndex};
pub use row::{parse_row, row_to_document, MatchRow};
pub use supabase::SupabaseVectorClient;

/// Build the backend named by `config.backend`.
///
/// The memory backend starts empty; callers that need data should construct
/// an [`InMemoryVectorIndex`] directly and insert into it.
pub fn create_vector_search(
    config: &VectorStoreConfig,
    dimensions: usize,
) -> SolaceResult<Arc<dyn IVectorSearch>> {
    match config.backend.as_str() {
        "memory" => Ok(Arc::new(InMemoryVectorIndex::new(dimensions))),
        "supabase" => Ok(Arc::new(SupabaseVectorClient::from_config(config)?)),
        other => Err(SearchError::RequestFailed {
            backend: other.to_string(),
            reason: "unsupported vector store backend".to_string(),
        }
        .into()),
    }
}
