//! Viewport-visibility watcher: threshold edge detection per element.
//!
//! One watcher exists per target (1:1). The host feeds it the element's
//! current visible fraction on every scroll/layout tick; the watcher reports
//! `Entered`/`Exited` only on threshold crossings, at exactly the granularity
//! the host delivers geometry (no debouncing).
//!
//! A freshly attached watcher starts non-intersecting, so its first
//! evaluation of an element already on screen delivers an "intersecting"
//! event. That is the initial-paint artifact the armed-skip state absorbs.

use crate::machine::VisibilityEvent;

/// Threshold-crossing detector for a single element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityWatcher {
    threshold: f32,
    intersecting: bool,
    active: bool,
}

impl VisibilityWatcher {
    /// Create an active watcher. Thresholds are clamped to [0, 1].
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            intersecting: false,
            active: true,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_intersecting(&self) -> bool {
        self.intersecting
    }

    /// Evaluate the current visible fraction, reporting a crossing if one
    /// occurred. Disposed watchers report nothing.
    ///
    /// A zero threshold means any overlap counts, matching the underlying
    /// browser primitive's zero-threshold behavior; a positive threshold
    /// requires `fraction >= threshold`.
    pub fn observe(&mut self, fraction: f32) -> Option<VisibilityEvent> {
        if !self.active {
            return None;
        }
        let intersecting = if self.threshold > 0.0 {
            fraction >= self.threshold
        } else {
            fraction > 0.0
        };
        if intersecting == self.intersecting {
            return None;
        }
        self.intersecting = intersecting;
        Some(if intersecting {
            VisibilityEvent::Entered
        } else {
            VisibilityEvent::Exited
        })
    }

    /// Dispose the watcher. The only way its lifetime ends.
    pub fn unobserve(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use VisibilityEvent::{Entered, Exited};

    #[test]
    fn test_reports_only_crossings() {
        let mut watcher = VisibilityWatcher::new(0.5);
        assert_eq!(watcher.observe(0.0), None);
        assert_eq!(watcher.observe(0.4), None);
        assert_eq!(watcher.observe(0.6), Some(Entered));
        // Still above threshold: no repeat.
        assert_eq!(watcher.observe(0.9), None);
        assert_eq!(watcher.observe(0.2), Some(Exited));
        assert_eq!(watcher.observe(0.1), None);
        assert_eq!(watcher.observe(0.5), Some(Entered));
    }

    #[test]
    fn test_first_observation_of_onscreen_element_enters() {
        let mut watcher = VisibilityWatcher::new(0.1);
        // The spurious initial delivery browsers fire on attach.
        assert_eq!(watcher.observe(1.0), Some(Entered));
    }

    #[test]
    fn test_zero_threshold_counts_any_overlap() {
        let mut watcher = VisibilityWatcher::new(0.0);
        assert_eq!(watcher.observe(0.0), None);
        assert_eq!(watcher.observe(0.001), Some(Entered));
        assert_eq!(watcher.observe(0.0), Some(Exited));
    }

    #[test]
    fn test_threshold_clamped() {
        let watcher = VisibilityWatcher::new(3.0);
        assert_eq!(watcher.threshold(), 1.0);
        let watcher = VisibilityWatcher::new(-1.0);
        assert_eq!(watcher.threshold(), 0.0);
    }

    #[test]
    fn test_unobserve_silences_watcher() {
        let mut watcher = VisibilityWatcher::new(0.1);
        assert_eq!(watcher.observe(1.0), Some(Entered));
        watcher.unobserve();
        assert!(!watcher.is_active());
        assert_eq!(watcher.observe(0.0), None);
        assert_eq!(watcher.observe(1.0), None);
    }
}
