// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[image]` - Image sources and display attributes
//! - `[overlay]` - Zoom overlay settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ZOOMBOX_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use zoombox::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

// Re-export all default constants so call sites can use `config::*`.
pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::state::AutoMode;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::sources::Loading;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Image sources and display attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ImageConfig {
    /// Primary display image. Required unless given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// Optional higher-resolution image shown in the zoom overlay.
    /// Falls back to `source` when absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_source: Option<PathBuf>,

    /// Which display dimension is auto-fit (height, width, or none).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_mode: Option<AutoMode>,

    /// Externally supplied width in logical pixels (used when the width
    /// dimension is not the auto-fit one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Externally supplied height in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    /// When true, clicking the inline image does nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_zoom: Option<bool>,

    /// Tooltip shown over both the inline and the zoomed image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// When the zoom image handle is materialized (lazy or eager).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading: Option<Loading>,
}

/// Zoom overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Delay in milliseconds between a close-button fullscreen exit and the
    /// overlay actually closing.
    #[serde(default = "default_close_settle", skip_serializing_if = "Option::is_none")]
    pub close_settle_delay_ms: Option<u64>,
}

fn default_close_settle() -> Option<u64> {
    Some(DEFAULT_CLOSE_SETTLE_MS)
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            close_settle_delay_ms: default_close_settle(),
        }
    }
}

// =============================================================================
// Top-level Config
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
}

const CONFIG_FILE: &str = "settings.toml";

fn default_config_path() -> Option<PathBuf> {
    paths::config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// A missing file yields defaults silently. An unreadable or unparseable
/// file also yields defaults, with the failure returned as a warning so
/// the caller can report it without aborting startup.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    let Some(path) = default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(error) => (Config::default(), Some(error.to_string())),
    }
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            image: ImageConfig {
                source: Some(PathBuf::from("photo.jpg")),
                zoom_source: Some(PathBuf::from("photo_hi.jpg")),
                auto_mode: Some(AutoMode::Width),
                width: None,
                height: Some(480.0),
                disable_zoom: Some(false),
                title: Some("A photo".to_string()),
                loading: Some(Loading::Eager),
            },
            overlay: OverlayConfig {
                close_settle_delay_ms: Some(250),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("failed to write empty file");

        let loaded = load_from_path(&config_path).expect("empty config should parse");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn default_overlay_carries_settle_delay() {
        let config = Config::default();
        assert_eq!(
            config.overlay.close_settle_delay_ms,
            Some(DEFAULT_CLOSE_SETTLE_MS)
        );
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[image]\nsource = \"a.png\"\ndisable_zoom = true\n")
            .expect("failed to write partial config");

        let loaded = load_from_path(&config_path).expect("partial config should parse");
        assert_eq!(loaded.image.source, Some(PathBuf::from("a.png")));
        assert_eq!(loaded.image.disable_zoom, Some(true));
        assert_eq!(loaded.general, GeneralConfig::default());
    }
}
