//! The reveal controller: discovery, binding, and the update tick.
//!
//! # Usage
//!
//! ```ignore
//! use reveal_dom::{Document, Viewport};
//! use reveal_scroll::RevealController;
//!
//! let mut document = Document::from_html(html);
//! // ... host assigns element rects ...
//! let viewport = Viewport::new(1280.0, 720.0);
//!
//! let mut controller = RevealController::new();
//! controller.initialize(&mut document, &viewport);   // defers while Loading
//! document.set_ready_state(ReadyState::Complete);
//! controller.document_ready(&mut document, &viewport);
//!
//! // On every scroll/layout tick:
//! controller.update(&mut document, &viewport);
//! for event in controller.drain_events() {
//!     // react to applied/removed classes
//! }
//! ```
//!
//! Control flow at binding: discovery → configuration parsing → per-element
//! initial-visibility check → watcher creation. Thereafter every element
//! runs independently: its watcher feeds its own state machine, and no
//! element's logic ever touches another element's class list or style.

use tracing::{debug, trace};

use reveal_dom::{Document, ReadyState, Viewport};

use crate::config::{ANIMATE_CLASS_PREFIX, DEFAULT_DELAY, DEFAULT_DURATION, RevealConfig};
use crate::events::{EventQueue, RevealEvent};
use crate::machine::{RevealAction, RevealState, VisibilityEvent};
use crate::target::RevealTarget;

/// Central coordinator for all reveal targets in a document.
///
/// Initialization is one-shot per document load: elements added after
/// binding are never discovered.
#[derive(Debug, Default)]
pub struct RevealController {
    targets: Vec<RevealTarget>,
    events: EventQueue,
    /// `initialize` ran while the document was still loading.
    deferred: bool,
    bound: bool,
}

impl RevealController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry point, invoked once per document load.
    ///
    /// Two-state readiness guard: while the document is `Loading` the bind
    /// is deferred until [`RevealController::document_ready`]; in any other
    /// state it runs immediately. A second call is a no-op.
    pub fn initialize(&mut self, document: &mut Document, viewport: &Viewport) {
        if self.bound {
            return;
        }
        if document.ready_state() == ReadyState::Loading {
            trace!("document still loading, deferring reveal binding");
            self.deferred = true;
            return;
        }
        self.bind(document, viewport);
    }

    /// One-shot "document ready" signal. Runs a deferred bind; no-op when
    /// nothing was deferred or binding already happened.
    pub fn document_ready(&mut self, document: &mut Document, viewport: &Viewport) {
        if self.bound || !self.deferred {
            return;
        }
        self.bind(document, viewport);
    }

    fn bind(&mut self, document: &mut Document, viewport: &Viewport) {
        self.bound = true;
        let candidates: Vec<String> = document
            .elements_with_attribute(crate::config::ATTR_MARKER)
            .map(|e| e.id.clone())
            .collect();
        if candidates.is_empty() {
            debug!("no reveal targets in document");
            return;
        }
        for node_id in candidates {
            let Some(element) = document.get_mut(&node_id) else {
                continue;
            };
            let Some(config) = RevealConfig::from_element(element) else {
                continue;
            };

            // Inline overrides are written once, at binding. A value equal
            // to its default is never written, so stylesheet-defined timing
            // stays in effect.
            if config.delay != DEFAULT_DELAY {
                element.style.set_property("animation-delay", &config.delay);
            }
            if config.duration != DEFAULT_DURATION {
                element
                    .style
                    .set_property("animation-duration", &config.duration);
            }

            let initially_visible = viewport.fully_contains(element.rect());
            debug!(
                node_id = %node_id,
                name = %config.name,
                threshold = config.threshold,
                once = config.once,
                initially_visible,
                "observing reveal target"
            );
            self.targets
                .push(RevealTarget::new(node_id, config, initially_visible));
        }
    }

    /// The host's scroll/layout tick.
    ///
    /// Feeds each active watcher the current visible fraction of its element
    /// and applies the resulting state-machine action as a single
    /// synchronous class-list mutation.
    pub fn update(&mut self, document: &mut Document, viewport: &Viewport) {
        if !self.bound {
            return;
        }
        for target in &mut self.targets {
            if !target.is_observed() {
                continue;
            }
            let Some(element) = document.get(&target.node_id) else {
                continue;
            };
            let fraction = viewport.visible_fraction(element.rect());
            let Some(event) = target.observe(fraction) else {
                continue;
            };
            let was_armed = target.state() == RevealState::ArmedSkip;
            match target.handle(event) {
                RevealAction::Apply { detach } => {
                    let Some(element) = document.get_mut(&target.node_id) else {
                        continue;
                    };
                    let class = target.config.class();
                    // Strip the whole animate-* family first, clearing any
                    // entrance class applied by other means.
                    let stripped =
                        element.remove_classes_where(|c| c.starts_with(ANIMATE_CLASS_PREFIX));
                    element.add_class(&class);
                    trace!(node_id = %target.node_id, class = %class, stripped, "applied reveal class");
                    self.events.push(RevealEvent::Applied {
                        node_id: target.node_id.clone(),
                        class,
                    });
                    if detach {
                        self.events.push(RevealEvent::Detached {
                            node_id: target.node_id.clone(),
                        });
                    }
                }
                RevealAction::Remove => {
                    let class = target.config.class();
                    if let Some(element) = document.get_mut(&target.node_id) {
                        element.remove_class(&class);
                    }
                    trace!(node_id = %target.node_id, class = %class, "removed reveal class");
                    self.events.push(RevealEvent::Removed {
                        node_id: target.node_id.clone(),
                        class,
                    });
                }
                RevealAction::None => {
                    if was_armed && event == VisibilityEvent::Entered {
                        trace!(node_id = %target.node_id, "suppressed initial-paint entry");
                        self.events.push(RevealEvent::Skipped {
                            node_id: target.node_id.clone(),
                        });
                    }
                }
            }
        }
    }

    /// Take all queued lifecycle events, oldest first.
    pub fn drain_events(&mut self) -> Vec<RevealEvent> {
        self.events.drain()
    }

    /// Whether binding has happened (immediately or via the ready signal).
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Number of targets whose watcher is still attached.
    pub fn observed_count(&self) -> usize {
        self.targets.iter().filter(|t| t.is_observed()).count()
    }

    /// Current state of a target's machine, for inspection.
    pub fn state_of(&self, node_id: &str) -> Option<RevealState> {
        self.targets
            .iter()
            .find(|t| t.node_id == node_id)
            .map(|t| t.state())
    }
}
