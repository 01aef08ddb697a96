// SPDX-License-Identifier: MPL-2.0
//! Overlay visibility state machine.
//!
//! The viewer is either closed (inline image only) or zoomed (modal
//! overlay shown), and a zoomed overlay is either windowed or fullscreen.
//! Fullscreen is reachable only from the zoomed state, and closing always
//! clears it.

/// Why the overlay closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The Escape key was pressed.
    Escape,
    /// A press landed outside the image and controls.
    OverlayClick,
    /// The close control was pressed.
    CloseButton,
}

impl CloseReason {
    /// Stable identifier for logs and event consumers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CloseReason::Escape => "escape",
            CloseReason::OverlayClick => "overlay-click",
            CloseReason::CloseButton => "close-button",
        }
    }
}

/// Visibility state of the zoom overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Only the inline image is shown.
    #[default]
    Closed,
    /// The modal overlay is shown, windowed or fullscreen.
    Zoomed { fullscreen: bool },
}

impl ViewState {
    /// Opens the overlay. Returns whether a transition happened.
    ///
    /// Opening always lands in the windowed variant.
    pub fn open(&mut self) -> bool {
        match self {
            ViewState::Closed => {
                *self = ViewState::Zoomed { fullscreen: false };
                true
            }
            ViewState::Zoomed { .. } => false,
        }
    }

    /// Closes the overlay, clearing fullscreen. Returns whether a
    /// transition happened.
    pub fn close(&mut self) -> bool {
        match self {
            ViewState::Closed => false,
            ViewState::Zoomed { .. } => {
                *self = ViewState::Closed;
                true
            }
        }
    }

    /// Updates the fullscreen flag. Returns whether the flag actually
    /// changed.
    ///
    /// A no-op while closed: fullscreen is only meaningful under zoom.
    pub fn set_fullscreen(&mut self, enabled: bool) -> bool {
        match self {
            ViewState::Closed => false,
            ViewState::Zoomed { fullscreen } => {
                if *fullscreen == enabled {
                    false
                } else {
                    *fullscreen = enabled;
                    true
                }
            }
        }
    }

    #[must_use]
    pub fn is_zoomed(self) -> bool {
        matches!(self, ViewState::Zoomed { .. })
    }

    #[must_use]
    pub fn is_fullscreen(self) -> bool {
        matches!(self, ViewState::Zoomed { fullscreen: true })
    }
}
