// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window-scope listeners (keyboard for Escape, resize for fullscreen
//! reconciliation) exist only while the zoom overlay is open. Recomputing
//! the subscription from state ties listener registration to the overlay's
//! lifetime, so nothing leaks across open/close cycles.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, Subscription};

/// Creates the event subscription for the current overlay state.
pub fn create_event_subscription(overlay_active: bool) -> Subscription<Message> {
    if !overlay_active {
        return Subscription::none();
    }

    event::listen_with(|event, status, window_id| {
        // Resize events feed fullscreen reconciliation regardless of focus.
        if let event::Event::Window(iced::window::Event::Resized(_)) = &event {
            return Some(Message::Viewer(component::Message::RawEvent {
                window: window_id,
                event: event.clone(),
            }));
        }

        // Keyboard events are only routed when no widget captured them.
        if let event::Event::Keyboard(..) = &event {
            return match status {
                event::Status::Ignored => Some(Message::Viewer(component::Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                })),
                event::Status::Captured => None,
            };
        }

        None
    })
}
