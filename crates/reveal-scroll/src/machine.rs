//! Per-element visibility state machine.
//!
//! The machine is a deterministic function of (current state, event type),
//! never of timing, so it stays correct under any ordering of rapid
//! alternating events. It decides what should happen to the element's class
//! list; the controller performs the actual DOM writes.

use serde::{Deserialize, Serialize};

/// State of one observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    /// The element was already inside the viewport at binding time; the
    /// first "intersecting" delivery must be suppressed so a separately
    /// applied entrance animation survives. Only a genuine exit clears this.
    ArmedSkip,
    /// No class currently applied; eligible to animate on entry.
    Idle,
    /// The animation class is currently applied.
    Animated,
    /// Terminal: the watcher has been disposed (one-shot targets only).
    Detached,
}

/// A threshold crossing reported by the element's watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityEvent {
    /// The element became intersecting (visible fraction met the threshold).
    Entered,
    /// The element became non-intersecting.
    Exited,
}

/// What the controller should do to the element after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// No class change.
    None,
    /// Strip every `animate-*` class, add this target's class; when `detach`
    /// is set, also dispose the watcher.
    Apply { detach: bool },
    /// Remove this target's class (re-trigger enabled).
    Remove,
}

/// The state machine for a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealMachine {
    state: RevealState,
}

impl RevealMachine {
    /// Initial state: `ArmedSkip` when the element was fully inside the
    /// viewport at binding time, `Idle` otherwise.
    pub fn new(initially_visible: bool) -> Self {
        Self {
            state: if initially_visible {
                RevealState::ArmedSkip
            } else {
                RevealState::Idle
            },
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Advance the machine with one visibility event.
    pub fn on_event(&mut self, event: VisibilityEvent, once: bool) -> RevealAction {
        match (self.state, event) {
            // The initial-paint artifact: ignored entirely. ArmedSkip is not
            // cleared here; the element hasn't truly left and re-entered yet.
            (RevealState::ArmedSkip, VisibilityEvent::Entered) => RevealAction::None,

            (RevealState::Idle, VisibilityEvent::Entered) => {
                self.state = if once {
                    RevealState::Detached
                } else {
                    RevealState::Animated
                };
                RevealAction::Apply { detach: once }
            }

            // Idempotent under repeated entries.
            (RevealState::Animated, VisibilityEvent::Entered)
            | (RevealState::Detached, VisibilityEvent::Entered) => RevealAction::None,

            // A genuine exit clears the skip flag; future entries are real.
            (RevealState::ArmedSkip, VisibilityEvent::Exited) => {
                self.state = RevealState::Idle;
                RevealAction::None
            }

            (RevealState::Animated, VisibilityEvent::Exited) if !once => {
                self.state = RevealState::Idle;
                RevealAction::Remove
            }

            (_, VisibilityEvent::Exited) => RevealAction::None,
        }
    }
}
