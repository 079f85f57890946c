//! # solace-embeddings
//!
//! Query embedding for retrieval. Ships a remote HTTP provider
//! (OpenAI/Azure-style `/embeddings` endpoint), a deterministic local hashing
//! provider, and [`EmbeddingEngine`], which adds caching and dimension checks
//! on top of either.

pub mod cache;
pub mod dimensions;
pub mod engine;
pub mod providers;

pub use engine::EmbeddingEngine;
pub use providers::{create_provider, HashingEmbeddingProvider, HttpEmbeddingProvider};
