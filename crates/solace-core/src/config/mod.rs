//! Configuration system for Solace.
//! TOML-based, 3-layer resolution: env > config file > compiled defaults.

pub mod defaults;
pub mod embedding_config;
pub mod observability_config;
pub mod retrieval_config;
pub mod solace_config;
pub mod topic_config;
pub mod vector_store_config;

pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use solace_config::SolaceConfig;
pub use topic_config::{TopicConfig, TopicRule};
pub use vector_store_config::VectorStoreConfig;
