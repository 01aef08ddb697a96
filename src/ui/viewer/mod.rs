// SPDX-License-Identifier: MPL-2.0
//! Zoomable image viewer.
//!
//! The [`component`] module owns the overlay state machine and rendering;
//! [`controls`] provides the overlay buttons and [`sources`] the image
//! source configuration.

pub mod component;
pub mod controls;
pub mod sources;
