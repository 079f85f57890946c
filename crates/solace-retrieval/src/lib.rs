//! # solace-retrieval
//!
//! Topic-aware retrieval for the assistant's context window.
//!
//! ## Architecture
//!
//! ```text
//! RetrievalEngine (IRetriever)
//! ├── TopicClassifier      query text → Option<Topic> (ordered pattern table)
//! ├── IEmbeddingProvider   query text → embedding
//! ├── candidate_count      top_k × multiplier
//! ├── IVectorSearch        embedding → candidates (descending similarity)
//! └── rerank               dedup → topic boost → stable sort → truncate
//! ```

pub mod engine;
pub mod expansion;
pub mod ranking;
pub mod topic;

pub use engine::RetrievalEngine;
pub use expansion::candidate_count;
pub use ranking::rerank;
pub use topic::{infer_topic, TopicClassifier};
