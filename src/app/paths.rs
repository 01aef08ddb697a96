// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the configuration directory.
//!
//! # Path Resolution Order
//!
//! 1. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 2. **Environment variable** (`ZOOMBOX_CONFIG_DIR`)
//! 3. **Platform default** - via the `dirs` crate
//!
//! The CLI override should be initialized once at startup, before any path
//! resolution functions are called.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Zoombox";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ZOOMBOX_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Later calls are ignored; the first value wins.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

/// Resolves the configuration directory.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Some(Some(dir)) = CLI_CONFIG_DIR.get() {
        return Some(dir.clone());
    }
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}
