//! Ranking: dedup → topic boost → stable sort → truncate.

pub mod booster;
pub mod deduplication;
pub mod reranker;

pub use booster::boost;
pub use deduplication::deduplicate;
pub use reranker::rerank;
