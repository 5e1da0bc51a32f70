//! Retained document model for the reveal workspace.
//!
//! This crate provides:
//! - **Geometry**: page-coordinate rects and the scrolled `Viewport`
//! - **Elements**: tag, attributes, ordered class list, inline style map
//! - **Documents**: id-keyed, order-preserving element storage with a
//!   two-state readiness flag
//! - **HTML ingestion**: `scraper`-based parsing into the retained model
//!
//! Layout is out of scope: element rects default to zero and are assigned by
//! the host (a layout engine, or a test harness placing rects by hand).

pub mod document;
pub mod element;
pub mod geometry;
mod html;

pub use document::{Document, ReadyState};
pub use element::{Element, InlineStyle};
pub use geometry::{Rect, Viewport};
