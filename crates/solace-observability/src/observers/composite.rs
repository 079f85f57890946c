use std::sync::Arc;

use solace_core::models::RetrievalEvent;
use solace_core::traits::IRetrievalObserver;

/// Forwards each event to several observers, in order.
#[derive(Clone, Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IRetrievalObserver>>,
}

impl CompositeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, observer: Arc<dyn IRetrievalObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl IRetrievalObserver for CompositeObserver {
    fn on_event(&self, event: &RetrievalEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::RecordingObserver;

    #[test]
    fn fans_out_to_all() {
        let a = Arc::new(RecordingObserver::new());
        let b = Arc::new(RecordingObserver::new());
        let composite = CompositeObserver::new().with(a.clone()).with(b.clone());
        composite.on_event(&RetrievalEvent::RetrievalFailed {
            kind: "cancelled".to_string(),
            reason: String::new(),
        });
        assert_eq!(a.events().len(), 1);
        assert_eq!(b.events().len(), 1);
        assert_eq!(composite.len(), 2);
    }
}
