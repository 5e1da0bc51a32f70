//! Visibility-triggered animation controller.
//!
//! Watches a set of document elements, detects when each enters or leaves
//! the visible viewport, and toggles CSS animation classes according to
//! per-element configuration (animation name, trigger threshold, delay,
//! duration, repeat-once-vs-always).
//!
//! # Architecture
//!
//! ```text
//! RevealController
//!   ├── discovery + RevealConfig parsing (binding time)
//!   └── RevealTarget (one per element)
//!         ├── VisibilityWatcher (threshold edge detection, 1:1)
//!         └── RevealMachine (armed-skip / idle / animated / detached)
//! ```
//!
//! Control flow: discovery → parser → per-element initial-visibility check →
//! watcher binding → state machine → class mutation. After binding, every
//! element runs independently; no state is shared between elements.
//!
//! The class naming contract is part of the interface: the controller adds
//! `animate-<name>` and cleanup strips exactly the `animate-`-prefixed
//! classes, no more, no less.

pub mod config;
pub mod controller;
pub mod events;
pub mod machine;
pub mod observer;
pub mod target;

pub use config::{
    ANIMATE_CLASS_PREFIX, ATTR_DELAY, ATTR_DURATION, ATTR_MARKER, ATTR_ONCE, ATTR_THRESHOLD,
    DEFAULT_DELAY, DEFAULT_DURATION, DEFAULT_THRESHOLD, RevealConfig,
};
pub use controller::RevealController;
pub use events::{EventQueue, RevealEvent};
pub use machine::{RevealAction, RevealMachine, RevealState, VisibilityEvent};
pub use observer::VisibilityWatcher;
pub use target::RevealTarget;
