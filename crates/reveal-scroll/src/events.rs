//! Reveal lifecycle events.
//!
//! The controller queues an event for every class mutation (and for
//! suppressed initial-paint entries) so hosts and tests can observe what
//! happened without diffing the document. Events are polled with
//! `drain_events` after update ticks.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Something the controller did (or deliberately did not do) to a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RevealEvent {
    /// The animation class was applied.
    Applied {
        node_id: String,
        /// The full class name, e.g. `animate-fade-up`.
        class: String,
    },
    /// The animation class was removed (repeating targets only).
    Removed { node_id: String, class: String },
    /// An initial-paint "intersecting" delivery was suppressed because the
    /// element was armed to skip.
    Skipped { node_id: String },
    /// The target's watcher was disposed (one-shot targets only).
    Detached { node_id: String },
}

impl RevealEvent {
    /// Get the node ID for this event.
    pub fn node_id(&self) -> &str {
        match self {
            Self::Applied { node_id, .. }
            | Self::Removed { node_id, .. }
            | Self::Skipped { node_id }
            | Self::Detached { node_id } => node_id,
        }
    }
}

/// FIFO queue of reveal events.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<RevealEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: RevealEvent) {
        self.events.push_back(event);
    }

    /// Take all queued events, oldest first.
    pub fn drain(&mut self) -> Vec<RevealEvent> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = EventQueue::new();
        assert!(queue.is_empty());

        queue.push(RevealEvent::Skipped {
            node_id: "a".to_string(),
        });
        queue.push(RevealEvent::Applied {
            node_id: "b".to_string(),
            class: "animate-fade".to_string(),
        });
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained[0].node_id(), "a");
        assert_eq!(drained[1].node_id(), "b");
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_event_serialization() {
        let event = RevealEvent::Applied {
            node_id: "hero".to_string(),
            class: "animate-fade-up".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "applied");
        assert_eq!(json["node_id"], "hero");
        assert_eq!(json["class"], "animate-fade-up");

        let back: RevealEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
