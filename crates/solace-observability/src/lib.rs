//! # solace-observability
//!
//! Tracing setup and span macros, observers that receive `RetrievalEvent`s,
//! a bounded query log, and retrieval counters.

pub mod instrumented;
pub mod metrics;
pub mod observers;
pub mod query_log;
pub mod tracing_setup;

pub use instrumented::InstrumentedRetriever;
pub use metrics::RetrievalMetrics;
pub use observers::{CompositeObserver, MetricsObserver, RecordingObserver, TracingObserver};
pub use query_log::{QueryLog, QueryLogEntry};
pub use solace_core::traits::NoopObserver;
pub use tracing_setup::init_tracing;
