//! One reveal target: a node id, its configuration, its state machine, and
//! its watcher, bound 1:1.
//!
//! The target is an explicit record rather than a callback closing over
//! element-local flags, which keeps the state machine testable without a
//! live viewport. The watcher's lifetime is bounded by the target's: when a
//! one-shot target fires, disposing the watcher is its terminal action.

use crate::config::RevealConfig;
use crate::machine::{RevealAction, RevealMachine, RevealState, VisibilityEvent};
use crate::observer::VisibilityWatcher;

/// A single observed element.
#[derive(Debug, Clone)]
pub struct RevealTarget {
    /// Identity reference into the document (non-owning).
    pub node_id: String,
    pub config: RevealConfig,
    machine: RevealMachine,
    watcher: VisibilityWatcher,
}

impl RevealTarget {
    /// Bind a target. `initially_visible` is the one-time geometric test
    /// performed at binding: whether the element's rect was fully contained
    /// in the viewport.
    pub fn new(node_id: impl Into<String>, config: RevealConfig, initially_visible: bool) -> Self {
        let watcher = VisibilityWatcher::new(config.threshold);
        Self {
            node_id: node_id.into(),
            machine: RevealMachine::new(initially_visible),
            watcher,
            config,
        }
    }

    pub fn state(&self) -> RevealState {
        self.machine.state()
    }

    /// Whether the watcher is still attached.
    pub fn is_observed(&self) -> bool {
        self.watcher.is_active()
    }

    /// Feed the current visible fraction to the watcher.
    pub fn observe(&mut self, fraction: f32) -> Option<VisibilityEvent> {
        self.watcher.observe(fraction)
    }

    /// Run the state machine for one event. A detaching `Apply` disposes the
    /// watcher here, so the caller only performs class mutations.
    pub fn handle(&mut self, event: VisibilityEvent) -> RevealAction {
        let action = self.machine.on_event(event, self.config.once);
        if let RevealAction::Apply { detach: true } = action {
            self.watcher.unobserve();
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_target_detaches_on_apply() {
        let mut target = RevealTarget::new("a", RevealConfig::named("fade"), false);
        assert!(target.is_observed());

        let event = target.observe(1.0).unwrap();
        assert_eq!(event, VisibilityEvent::Entered);
        assert_eq!(target.handle(event), RevealAction::Apply { detach: true });

        assert!(!target.is_observed());
        assert_eq!(target.state(), RevealState::Detached);
        // Disposed watcher delivers nothing more.
        assert_eq!(target.observe(0.0), None);
    }

    #[test]
    fn test_repeating_target_keeps_watching() {
        let config = RevealConfig::named("fade").with_once(false);
        let mut target = RevealTarget::new("a", config, false);

        let enter = target.observe(1.0).unwrap();
        assert_eq!(target.handle(enter), RevealAction::Apply { detach: false });
        assert!(target.is_observed());

        let exit = target.observe(0.0).unwrap();
        assert_eq!(target.handle(exit), RevealAction::Remove);
        assert!(target.is_observed());
        assert_eq!(target.state(), RevealState::Idle);
    }

    #[test]
    fn test_watcher_uses_configured_threshold() {
        let config = RevealConfig::named("fade").with_threshold(0.75);
        let mut target = RevealTarget::new("a", config, false);
        assert_eq!(target.observe(0.5), None);
        assert_eq!(target.observe(0.8), Some(VisibilityEvent::Entered));
    }
}
