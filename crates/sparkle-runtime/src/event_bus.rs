//! Event bus for broadcasting engine events

use crate::event::SparkleEvent;

/// A simple event queue that systems push to and the host drains
pub struct EventBus {
    events: Vec<SparkleEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event onto the bus
    pub fn push(&mut self, event: SparkleEvent) {
        self.events.push(event);
    }

    /// Push every event from an iterator, preserving order
    pub fn extend(&mut self, events: impl IntoIterator<Item = SparkleEvent>) {
        self.events.extend(events);
    }

    /// Drain all events from the bus, returning them
    pub fn drain(&mut self) -> Vec<SparkleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }
}
