// SPDX-License-Identifier: MPL-2.0
//! This module handles the reader's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gesture]` - Swipe classification thresholds
//! - `[feed]` - Backend URL, page size and request timeout
//!
//! Every field is optional; missing or out-of-range values fall back to
//! [`defaults`] or are clamped by the matching domain newtype.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `NEWSDECK_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use newsdeck::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.gesture.threshold_px = Some(50.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::gesture::{AxisLockSlop, HorizontalGuard, MaxGestureDuration, SwipeThreshold};
use crate::error::{Error, Result};
use crate::gesture::GestureSettings;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Swipe classification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GestureConfig {
    /// Vertical travel (px) a drag needs to count as a swipe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_px: Option<f32>,

    /// Drags slower than this (ms) are treated as scrolling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration_ms: Option<u64>,

    /// Horizontal travel (px) past which a sideways drag is rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_guard_px: Option<f32>,

    /// Movement (px) tolerated before the drag locks to an axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_slop_px: Option<f32>,
}

/// Backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeedConfig {
    /// Base URL of the news backend, e.g. `https://news.example.org`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// How many items to request per refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Per-request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Reader configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub gesture: GestureConfig,

    #[serde(default)]
    pub feed: FeedConfig,
}

impl Config {
    /// Builds classifier thresholds, clamping anything out of range.
    #[must_use]
    pub fn gesture_settings(&self) -> GestureSettings {
        let g = &self.gesture;
        GestureSettings {
            threshold: SwipeThreshold::new(g.threshold_px.unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX)),
            max_duration: MaxGestureDuration::from_millis(
                g.max_duration_ms.unwrap_or(DEFAULT_MAX_GESTURE_MS),
            ),
            horizontal_guard: HorizontalGuard::new(
                g.horizontal_guard_px.unwrap_or(DEFAULT_HORIZONTAL_GUARD_PX),
            ),
            lock_slop: AxisLockSlop::new(g.lock_slop_px.unwrap_or(DEFAULT_LOCK_SLOP_PX)),
        }
    }

    /// Backend base URL with surrounding whitespace and trailing slashes removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.feed
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// Page size, clamped to the supported range.
    #[must_use]
    pub fn feed_limit(&self) -> u32 {
        self.feed
            .limit
            .unwrap_or(DEFAULT_FEED_LIMIT)
            .clamp(MIN_FEED_LIMIT, MAX_FEED_LIMIT)
    }

    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.feed
                .timeout_secs
                .unwrap_or(DEFAULT_TIMEOUT_SECS)
                .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS),
        )
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    warn!(path = %path.display(), %err, "ignoring unreadable settings");
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
