//! `IRetrievalObserver` implementations.

mod composite;
mod metrics_observer;
mod recording;
mod tracing_observer;

pub use composite::CompositeObserver;
pub use metrics_observer::MetricsObserver;
pub use recording::RecordingObserver;
pub use tracing_observer::TracingObserver;
