// SPDX-License-Identifier: MPL-2.0
//! Localization built on Fluent with embedded bundles.

pub mod fluent;
