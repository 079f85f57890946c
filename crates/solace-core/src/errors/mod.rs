//! Error handling for Solace.
//! One error enum per subsystem, `thiserror` only, aggregated by [`SolaceError`].

pub mod config_error;
pub mod embedding_error;
pub mod retrieval_error;
pub mod search_error;
pub mod solace_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use retrieval_error::RetrievalError;
pub use search_error::SearchError;
pub use solace_error::{SolaceError, SolaceResult};
