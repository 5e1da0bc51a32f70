//! Per-element reveal configuration and attribute parsing.
//!
//! Configuration is read off each candidate element as string attributes.
//! Parsing is total: a malformed attribute silently falls back to its
//! default, never to an error.
//!
//! # Attribute surface
//!
//! | Attribute | Meaning | Default |
//! |---|---|---|
//! | `data-animate` | marks the element; value is the animation name | required |
//! | `data-animate-threshold` | intersection fraction | `0.1` |
//! | `data-animate-delay` | CSS delay string | `"0ms"` |
//! | `data-animate-duration` | CSS duration string | `"600ms"` |
//! | `data-animate-once` | literal `"false"` disables one-shot | `true` |
//!
//! # Class naming contract
//!
//! The controller adds `animate-<name>` and strips exactly the classes
//! prefixed `animate-` when applying, no more and no less. Cleanup relies on
//! this prefix, so entrance animations declared in CSS must use it too.

use serde::{Deserialize, Serialize};

use reveal_dom::Element;

/// Marker attribute; its value is the animation name.
pub const ATTR_MARKER: &str = "data-animate";
/// Intersection fraction attribute.
pub const ATTR_THRESHOLD: &str = "data-animate-threshold";
/// CSS delay attribute.
pub const ATTR_DELAY: &str = "data-animate-delay";
/// CSS duration attribute.
pub const ATTR_DURATION: &str = "data-animate-duration";
/// One-shot attribute; only the literal `"false"` disables one-shot.
pub const ATTR_ONCE: &str = "data-animate-once";

/// Prefix of every class the controller adds or strips.
pub const ANIMATE_CLASS_PREFIX: &str = "animate-";

/// Default intersection fraction.
pub const DEFAULT_THRESHOLD: f32 = 0.1;
/// Default animation delay.
pub const DEFAULT_DELAY: &str = "0ms";
/// Default animation duration.
pub const DEFAULT_DURATION: &str = "600ms";

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

fn default_delay() -> String {
    DEFAULT_DELAY.to_string()
}

fn default_duration() -> String {
    DEFAULT_DURATION.to_string()
}

fn default_once() -> bool {
    true
}

/// Fully-defaulted configuration for one reveal target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Which class family (`animate-<name>`) to toggle.
    pub name: String,
    /// Fraction of the element's area that must be visible to count as
    /// intersecting.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// CSS delay string, written as an inline `animation-delay` only when it
    /// differs from the default.
    #[serde(default = "default_delay")]
    pub delay: String,
    /// CSS duration string, written as an inline `animation-duration` only
    /// when it differs from the default.
    #[serde(default = "default_duration")]
    pub duration: String,
    /// One-shot: apply the class at most once, then stop watching.
    #[serde(default = "default_once")]
    pub once: bool,
}

impl RevealConfig {
    /// Create a config for the given animation name with all defaults.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            threshold: DEFAULT_THRESHOLD,
            delay: default_delay(),
            duration: default_duration(),
            once: true,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Read the configuration off an element's attributes.
    ///
    /// Returns `None` only when the marker attribute is absent; every other
    /// attribute degrades to its default.
    pub fn from_element(element: &Element) -> Option<Self> {
        let name = element.attribute(ATTR_MARKER)?.to_string();
        let threshold = element
            .attribute(ATTR_THRESHOLD)
            .and_then(|raw| raw.trim().parse::<f32>().ok())
            .filter(|t| t.is_finite())
            .unwrap_or(DEFAULT_THRESHOLD);
        let delay = element
            .attribute(ATTR_DELAY)
            .map(str::to_string)
            .unwrap_or_else(default_delay);
        let duration = element
            .attribute(ATTR_DURATION)
            .map(str::to_string)
            .unwrap_or_else(default_duration);
        let once = element.attribute(ATTR_ONCE) != Some("false");
        Some(Self {
            name,
            threshold,
            delay,
            duration,
            once,
        })
    }

    /// The class this target toggles: `animate-<name>`.
    pub fn class(&self) -> String {
        format!("{ANIMATE_CLASS_PREFIX}{}", self.name)
    }

    pub fn has_custom_delay(&self) -> bool {
        self.delay != DEFAULT_DELAY
    }

    pub fn has_custom_duration(&self) -> bool {
        self.duration != DEFAULT_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_attributes_absent() {
        let element = Element::new("a", "div").with_attribute(ATTR_MARKER, "fade-up");
        let config = RevealConfig::from_element(&element).unwrap();
        assert_eq!(config.name, "fade-up");
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.delay, DEFAULT_DELAY);
        assert_eq!(config.duration, DEFAULT_DURATION);
        assert!(config.once);
        assert_eq!(config.class(), "animate-fade-up");
        assert!(!config.has_custom_delay());
        assert!(!config.has_custom_duration());
    }

    #[test]
    fn test_no_marker_no_config() {
        let element = Element::new("a", "div").with_attribute(ATTR_THRESHOLD, "0.5");
        assert!(RevealConfig::from_element(&element).is_none());
    }

    #[test]
    fn test_threshold_parsing_is_total() {
        let parse = |raw: &str| {
            let element = Element::new("a", "div")
                .with_attribute(ATTR_MARKER, "fade")
                .with_attribute(ATTR_THRESHOLD, raw);
            RevealConfig::from_element(&element).unwrap().threshold
        };
        assert_eq!(parse("0.5"), 0.5);
        assert_eq!(parse(" 0.25 "), 0.25);
        assert_eq!(parse("banana"), DEFAULT_THRESHOLD);
        assert_eq!(parse(""), DEFAULT_THRESHOLD);
        assert_eq!(parse("NaN"), DEFAULT_THRESHOLD);
        assert_eq!(parse("inf"), DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_once_requires_literal_false() {
        let parse = |raw: &str| {
            let element = Element::new("a", "div")
                .with_attribute(ATTR_MARKER, "fade")
                .with_attribute(ATTR_ONCE, raw);
            RevealConfig::from_element(&element).unwrap().once
        };
        assert!(!parse("false"));
        assert!(parse("no"));
        assert!(parse("False"));
        assert!(parse("true"));
        assert!(parse(""));
    }

    #[test]
    fn test_time_strings_taken_verbatim() {
        let element = Element::new("a", "div")
            .with_attribute(ATTR_MARKER, "fade")
            .with_attribute(ATTR_DELAY, "250ms")
            .with_attribute(ATTR_DURATION, "0ms");
        let config = RevealConfig::from_element(&element).unwrap();
        assert_eq!(config.delay, "250ms");
        assert_eq!(config.duration, "0ms");
        assert!(config.has_custom_delay());
        // "0ms" differs from the "600ms" default, so it counts as custom.
        assert!(config.has_custom_duration());
    }

    #[test]
    fn test_serde_defaults() {
        let config: RevealConfig = serde_json::from_str(r#"{"name": "fade"}"#).unwrap();
        assert_eq!(config, RevealConfig::named("fade"));
    }
}
