//! Retained document: id-keyed element storage with preserved order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::element::Element;

/// Two-state document readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadyState {
    /// The document is still being delivered; deferred work should wait for
    /// the ready signal.
    Loading,
    /// The document is ready; deferred work runs immediately.
    Complete,
}

/// An ordered collection of elements keyed by id.
///
/// Hand-assembled documents start `Complete`; documents produced by HTML
/// ingestion start `Loading` and expect the host to flip readiness once it
/// has finished its own setup (layout, listeners).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    ready_state: ReadyState,
    nodes: HashMap<String, Element>,
    order: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            ready_state: ReadyState::Complete,
            nodes: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn set_ready_state(&mut self, state: ReadyState) {
        self.ready_state = state;
    }

    /// Insert an element, returning its id. An element with an already-known
    /// id replaces the existing node in place (document order unchanged).
    pub fn insert(&mut self, element: Element) -> String {
        let id = element.id.clone();
        if id.is_empty() {
            warn!(tag = %element.tag, "refusing to insert element without an id");
            return id;
        }
        if self.nodes.insert(id.clone(), element).is_none() {
            self.order.push(id.clone());
        }
        id
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Elements carrying the given attribute, in document order. The
    /// returned iterator is finite and can be re-created at any time.
    pub fn elements_with_attribute<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().filter(move |e| e.has_attribute(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut document = Document::new();
        document.insert(Element::new("a", "div").with_attribute("data-animate", "fade"));
        document.insert(Element::new("b", "p"));
        document.insert(Element::new("c", "section").with_attribute("data-animate", "zoom"));
        document
    }

    #[test]
    fn test_document_order_preserved() {
        let document = sample();
        let ids: Vec<_> = document.elements().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_elements_with_attribute_is_ordered_and_restartable() {
        let document = sample();
        let first: Vec<_> = document
            .elements_with_attribute("data-animate")
            .map(|e| e.id.as_str())
            .collect();
        let second: Vec<_> = document
            .elements_with_attribute("data-animate")
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(first, ["a", "c"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_insert_replaces_known_id() {
        let mut document = sample();
        document.insert(Element::new("b", "span"));
        assert_eq!(document.len(), 3);
        assert_eq!(document.get("b").unwrap().tag, "span");
    }

    #[test]
    fn test_ready_state() {
        let mut document = Document::new();
        assert_eq!(document.ready_state(), ReadyState::Complete);
        document.set_ready_state(ReadyState::Loading);
        assert_eq!(document.ready_state(), ReadyState::Loading);
    }
}
