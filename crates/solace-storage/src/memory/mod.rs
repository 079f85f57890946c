//! In-memory vector index.

mod index;
mod similarity;

pub use index::{IndexedChunk, InMemoryVectorIndex};
pub use similarity::cosine_similarity;
