//! Retained element node: tag, attributes, class list, inline style, rect.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Ordered inline style property map.
///
/// Properties keep their insertion order; setting an existing property
/// rewrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineStyle {
    properties: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any existing value.
    pub fn set_property(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.properties.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            self.properties.push((name.to_string(), value.to_string()));
        }
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a property. Returns true if it was present.
    pub fn remove_property(&mut self, name: &str) -> bool {
        let before = self.properties.len();
        self.properties.retain(|(n, _)| n != name);
        self.properties.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Render as a `name: value; ...` CSS text string.
    pub fn css_text(&self) -> String {
        self.properties
            .iter()
            .map(|(n, v)| format!("{n}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A single document element.
///
/// The `id` and `class` attributes are decomposed into the `id` field and the
/// class list; `attributes` holds everything else verbatim. The rect is in
/// page coordinates and defaults to zero until layout assigns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub tag: String,
    attributes: HashMap<String, String>,
    classes: Vec<String>,
    pub style: InlineStyle,
    rect: Rect,
}

impl Element {
    pub fn new(id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Drop every class matching the predicate. Returns how many were removed.
    pub fn remove_classes_where(&mut self, predicate: impl Fn(&str) -> bool) -> usize {
        let before = self.classes.len();
        self.classes.retain(|c| !predicate(c));
        before - self.classes.len()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_style_set_and_replace() {
        let mut style = InlineStyle::new();
        assert!(style.is_empty());

        style.set_property("animation-delay", "250ms");
        style.set_property("animation-duration", "1s");
        assert_eq!(style.len(), 2);
        assert_eq!(style.property("animation-delay"), Some("250ms"));

        // Replacing keeps order.
        style.set_property("animation-delay", "500ms");
        assert_eq!(style.len(), 2);
        assert_eq!(style.property("animation-delay"), Some("500ms"));
        assert_eq!(style.css_text(), "animation-delay: 500ms; animation-duration: 1s");

        assert!(style.remove_property("animation-delay"));
        assert!(!style.remove_property("animation-delay"));
        assert_eq!(style.property("animation-delay"), None);
    }

    #[test]
    fn test_class_list() {
        let mut element = Element::new("hero", "div").with_class("card");
        element.add_class("animate-fade");
        element.add_class("animate-fade"); // duplicate ignored
        assert_eq!(element.classes(), &["card", "animate-fade"]);

        assert!(element.remove_class("animate-fade"));
        assert!(!element.has_class("animate-fade"));
        assert!(!element.remove_class("missing"));
    }

    #[test]
    fn test_remove_classes_where() {
        let mut element = Element::new("hero", "div")
            .with_class("card")
            .with_class("animate-fade")
            .with_class("animate-slide-up");
        let removed = element.remove_classes_where(|c| c.starts_with("animate-"));
        assert_eq!(removed, 2);
        assert_eq!(element.classes(), &["card"]);
    }

    #[test]
    fn test_attributes() {
        let element = Element::new("hero", "section").with_attribute("data-animate", "fade-up");
        assert!(element.has_attribute("data-animate"));
        assert_eq!(element.attribute("data-animate"), Some("fade-up"));
        assert_eq!(element.attribute("missing"), None);
    }
}
