//! Reveal runtime configuration
//!
//! This crate provides centralized configuration for the reveal tools,
//! loading settings from `reveal.toml` as an alternative to environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for the reveal tools
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RevealSettings {
    /// Demo application settings
    pub demo: DemoSettings,
}

/// Demo application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoSettings {
    /// HTML document to load
    pub document: Option<PathBuf>,
    /// Simulated viewport width in pixels
    pub viewport_width: f32,
    /// Simulated viewport height in pixels
    pub viewport_height: f32,
    /// Scroll increment per simulated tick in pixels
    pub scroll_step: f32,
    /// Vertical spacing of the synthetic flow layout in pixels
    pub row_height: f32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            document: None,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            scroll_step: 120.0,
            row_height: 360.0,
        }
    }
}

impl RevealSettings {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the reveal.toml configuration file
    ///
    /// # Returns
    /// * `Ok(RevealSettings)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (reveal.toml in the
    /// current directory) or return default configuration if file doesn't
    /// exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("reveal.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(document) = std::env::var("REVEAL_DOCUMENT") {
            self.demo.document = Some(PathBuf::from(document));
        }
        if let Ok(val) = std::env::var("REVEAL_VIEWPORT_WIDTH") {
            if let Ok(width) = val.parse::<f32>() {
                self.demo.viewport_width = width;
            }
        }
        if let Ok(val) = std::env::var("REVEAL_VIEWPORT_HEIGHT") {
            if let Ok(height) = val.parse::<f32>() {
                self.demo.viewport_height = height;
            }
        }
        if let Ok(val) = std::env::var("REVEAL_SCROLL_STEP") {
            if let Ok(step) = val.parse::<f32>() {
                self.demo.scroll_step = step;
            }
        }
        if let Ok(val) = std::env::var("REVEAL_ROW_HEIGHT") {
            if let Ok(height) = val.parse::<f32>() {
                self.demo.row_height = height;
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from reveal.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut settings = Self::load_or_default();
        settings.merge_with_env();
        settings
    }
}
