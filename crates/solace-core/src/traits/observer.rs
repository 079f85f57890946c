use crate::models::RetrievalEvent;

/// Sink for structured retrieval events.
///
/// Best-effort: implementations must swallow their own failures, and the
/// retrieval result never depends on what an observer does.
pub trait IRetrievalObserver: Send + Sync {
    fn on_event(&self, event: &RetrievalEvent);
}

/// Observer that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl IRetrievalObserver for NoopObserver {
    fn on_event(&self, _event: &RetrievalEvent) {}
}
