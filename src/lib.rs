// SPDX-License-Identifier: MPL-2.0
//! `zoombox` is a click-to-zoom image overlay viewer built with the Iced GUI framework.
//!
//! It renders a single inline image and, on click, opens a full-viewport
//! zoom overlay with fullscreen toggling, close-on-escape, and
//! close-on-outside-click. Overlay activity is broadcast process-wide on
//! the [`events`] bus.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod i18n;
pub mod ui;
