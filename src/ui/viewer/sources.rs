// SPDX-License-Identifier: MPL-2.0
//! Image source configuration for the viewer.
//!
//! Pairs the primary display image with an optional higher-resolution zoom
//! variant. The zoom variant falls back to the primary source when absent
//! or empty, so callers never deal with the distinction.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The inline image and its optional zoom variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSources {
    source: PathBuf,
    zoom_source: Option<PathBuf>,
}

impl ImageSources {
    /// Creates the source pair. An empty zoom path is treated as absent.
    #[must_use]
    pub fn new(source: PathBuf, zoom_source: Option<PathBuf>) -> Self {
        let zoom_source = zoom_source.filter(|path| !path.as_os_str().is_empty());
        Self {
            source,
            zoom_source,
        }
    }

    /// The primary display image.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The image shown in the zoom overlay: the zoom variant when present,
    /// otherwise the primary source.
    #[must_use]
    pub fn zoom_source(&self) -> &Path {
        self.zoom_source.as_deref().unwrap_or(&self.source)
    }

    /// Whether a distinct zoom variant is configured.
    #[must_use]
    pub fn has_zoom_variant(&self) -> bool {
        self.zoom_source.is_some()
    }

    /// Display string of the primary source, used in emitted notifications.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.source.display().to_string()
    }

    /// File name of the primary source, if it has one.
    #[must_use]
    pub fn file_name(&self) -> Option<String> {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}

/// When the zoom image handle is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Loading {
    /// Create the zoom handle on first open.
    #[default]
    Lazy,
    /// Create the zoom handle at construction.
    Eager,
}

impl FromStr for Loading {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "lazy" => Ok(Loading::Lazy),
            "eager" => Ok(Loading::Eager),
            other => Err(format!("invalid loading hint '{other}', expected lazy or eager")),
        }
    }
}

/// Reads the pixel dimensions of an image without decoding it fully.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32)> {
    Ok(image_rs::image_dimensions(path)?)
}
