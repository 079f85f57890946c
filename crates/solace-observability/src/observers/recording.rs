use std::sync::Mutex;

use solace_core::models::RetrievalEvent;
use solace_core::traits::IRetrievalObserver;

/// Keeps every event in memory, in arrival order. Meant for tests.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<RetrievalEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<RetrievalEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Names of the recorded events, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .map(|e| e.iter().map(RetrievalEvent::name).collect())
            .unwrap_or_default()
    }

    pub fn count(&self, name: &str) -> usize {
        self.names().into_iter().filter(|n| *n == name).count()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl IRetrievalObserver for RecordingObserver {
    fn on_event(&self, event: &RetrievalEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
