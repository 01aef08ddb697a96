// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Overlay**: Close-settle delay for the zoom overlay
//! - **Events**: Broadcast channel sizing

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Default delay before the overlay closes after a fullscreen exit (in ms).
///
/// Gives the windowing system time to settle the mode change before the
/// overlay is torn down, avoiding a visible flash of the inline view at
/// fullscreen size.
pub const DEFAULT_CLOSE_SETTLE_MS: u64 = 100;

/// Minimum close-settle delay (in ms).
pub const MIN_CLOSE_SETTLE_MS: u64 = 0;

/// Maximum close-settle delay (in ms).
pub const MAX_CLOSE_SETTLE_MS: u64 = 1_000;

// ==========================================================================
// Event Bus Defaults
// ==========================================================================

/// Capacity of the process-wide viewer event channel.
///
/// Slow subscribers that lag behind this many events start losing the
/// oldest ones, which keeps publication non-blocking.
pub const EVENT_BUS_CAPACITY: usize = 32;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_CLOSE_SETTLE_MS >= MIN_CLOSE_SETTLE_MS);
    assert!(DEFAULT_CLOSE_SETTLE_MS >= MIN_CLOSE_SETTLE_MS);
    assert!(DEFAULT_CLOSE_SETTLE_MS <= MAX_CLOSE_SETTLE_MS);

    assert!(EVENT_BUS_CAPACITY > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_settle_defaults_are_valid() {
        assert_eq!(DEFAULT_CLOSE_SETTLE_MS, 100);
        assert!(DEFAULT_CLOSE_SETTLE_MS >= MIN_CLOSE_SETTLE_MS);
        assert!(DEFAULT_CLOSE_SETTLE_MS <= MAX_CLOSE_SETTLE_MS);
    }

    #[test]
    fn event_bus_capacity_is_positive() {
        assert!(EVENT_BUS_CAPACITY > 0);
    }
}
