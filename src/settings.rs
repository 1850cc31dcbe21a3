//! Runtime settings
//!
//! Loaded from an optional JSON file. Missing fields take their defaults, and
//! an unreadable or malformed file falls back to defaults entirely.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;
use crate::sim::Viewport;
use crate::tuning::Tuning;
use crate::ui::Locale;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Obstacle course seed; `None` picks one from the clock
    pub seed: Option<u64>,
    /// Language for status text and titles
    pub locale: Locale,
    /// Initial playable area
    pub viewport: Viewport,
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u64,
    /// Safety cap on ticks for a headless session
    pub max_ticks: u64,
    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            locale: Locale::default(),
            viewport: Viewport::default(),
            tick_interval_ms: TICK_INTERVAL_MS,
            max_ticks: 50 * 60 * 5,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
