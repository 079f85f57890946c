//! Retrieval counters.

mod retrieval_metrics;

pub use retrieval_metrics::RetrievalMetrics;
