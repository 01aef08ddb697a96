// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::state::AutoMode;
use crate::ui::viewer::component;
use iced::window;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    /// Result of the startup query for the application window id.
    LatestWindowFetched(Option<window::Id>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ZOOMBOX_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Primary image to display. Falls back to `[image] source` in the
    /// config file when absent.
    pub source: Option<PathBuf>,
    /// Optional higher-resolution image for the zoom overlay.
    pub zoom_source: Option<PathBuf>,
    /// Which display dimension auto-fits the image.
    pub auto_mode: Option<AutoMode>,
    /// Tooltip shown over the inline and zoomed image.
    pub title: Option<String>,
    /// Disables click-to-zoom entirely.
    pub disable_zoom: bool,
    /// Materialize the zoom image at startup instead of on first open.
    pub eager: bool,
}
