//! # solace-core
//!
//! Foundation crate for the Solace retrieval system.
//! Defines the document model, topic vocabulary, traits for the external
//! collaborators (embedding provider, vector search, observer), errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod topic;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SolaceConfig;
pub use errors::{SolaceError, SolaceResult};
pub use models::{Document, RetrievalEvent, RetrievalResult};
pub use topic::Topic;
