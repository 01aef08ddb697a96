// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for overlay controls.
//!
//! Icons are monochrome SVGs embedded at compile time via `include_bytes!`;
//! handles are cached using `OnceLock` so repeated views reuse them. Colors
//! are applied at the call site through [`crate::ui::styles::overlay::icon`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `expand` not `enter_fullscreen`).

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Defines an icon function with a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    expand,
    "expand.svg",
    "Expand icon: four corners pointing outward."
);
define_icon!(
    compress,
    "compress.svg",
    "Compress icon: four corners pointing inward."
);
define_icon!(close, "close.svg", "Close icon: diagonal cross.");
