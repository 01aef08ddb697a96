// SPDX-License-Identifier: MPL-2.0
//! Update logic: routes messages to the viewer component and applies the
//! effects it returns (event publication, window mode changes).

use super::{App, Message};
use crate::events::{self, ViewerEvent};
use crate::ui::viewer::component;
use iced::{window, Task};

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::LatestWindowFetched(id) => {
            if let Some(id) = id {
                app.window_id = Some(id);
            }
            Task::none()
        }
        Message::Viewer(msg) => {
            if let component::Message::RawEvent { window, .. } = &msg {
                app.window_id = Some(*window);
            }
            let (effect, task) = app.viewer.handle_message(msg);
            Task::batch([task, apply_viewer_effect(app, effect)])
        }
    }
}

/// Applies a viewer effect, publishing notifications on the process-wide
/// bus and translating mode requests into window tasks.
fn apply_viewer_effect(app: &mut App, effect: component::Effect) -> Task<Message> {
    match effect {
        component::Effect::None => Task::none(),
        component::Effect::Opened { image } => {
            events::bus().publish(ViewerEvent::Opened { image });
            Task::none()
        }
        component::Effect::Closed { image, reason } => {
            events::bus().publish(ViewerEvent::Closed { image, reason });
            Task::none()
        }
        component::Effect::FullscreenChanged { image, enabled } => {
            events::bus().publish(ViewerEvent::FullscreenChanged { image, enabled });
            Task::none()
        }
        component::Effect::SetWindowMode(mode) => match app.window_id {
            // The flag is only updated when the queried mode comes back,
            // so a declined request leaves the viewer untouched.
            Some(id) => window::set_mode(id, mode).chain(query_window_mode(id)),
            None => Task::none(),
        },
        component::Effect::SyncWindowMode => match app.window_id {
            Some(id) => query_window_mode(id),
            None => Task::none(),
        },
    }
}

fn query_window_mode(id: window::Id) -> Task<Message> {
    window::get_mode(id).map(|mode| Message::Viewer(component::Message::ModeConfirmed(mode)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use crate::config::Config;
    use crate::ui::state::CloseReason;
    use crate::ui::viewer::component::Surface;
    use std::path::PathBuf;

    /// Drains the receiver, keeping only events for the given image. Other
    /// tests publish on the same global bus, so filtering is required.
    fn drain_for(
        rx: &mut tokio::sync::broadcast::Receiver<ViewerEvent>,
        image: &str,
    ) -> Vec<ViewerEvent> {
        let mut matching = Vec::new();
        while let Ok(event) = rx.try_recv() {
            let event_image = match &event {
                ViewerEvent::Opened { image } => image,
                ViewerEvent::Closed { image, .. } => image,
                ViewerEvent::FullscreenChanged { image, .. } => image,
            };
            if event_image == image {
                matching.push(event);
            }
        }
        matching
    }

    fn test_app(source: &str) -> App {
        let flags = Flags {
            source: Some(PathBuf::from(source)),
            ..Flags::default()
        };
        App::new(flags, Config::default(), PathBuf::from(source)).0
    }

    #[test]
    fn open_and_escape_publish_on_the_bus() {
        let image = "update-test-open.jpg";
        let mut app = test_app(image);
        let mut rx = events::bus().subscribe();

        let _ = update(
            &mut app,
            Message::Viewer(component::Message::SurfacePressed(Surface::InlineImage)),
        );
        let _ = update(
            &mut app,
            Message::Viewer(component::Message::SurfacePressed(Surface::Backdrop)),
        );

        let events = drain_for(&mut rx, image);
        assert_eq!(
            events,
            vec![
                ViewerEvent::Opened {
                    image: image.to_string()
                },
                ViewerEvent::Closed {
                    image: image.to_string(),
                    reason: CloseReason::OverlayClick,
                },
            ]
        );
    }

    #[test]
    fn mode_requests_without_a_window_are_absorbed() {
        let image = "update-test-nowindow.jpg";
        let mut app = test_app(image);

        let _ = update(
            &mut app,
            Message::Viewer(component::Message::SurfacePressed(Surface::InlineImage)),
        );
        // No window id was ever captured; the request is dropped silently
        // and the viewer stays windowed.
        let _ = update(
            &mut app,
            Message::Viewer(component::Message::Controls(
                crate::ui::viewer::controls::Message::ToggleFullscreen,
            )),
        );

        assert!(app.viewer.is_zoomed());
        assert!(!app.viewer.is_fullscreen());
    }

    #[test]
    fn latest_window_fetch_stores_the_id() {
        let mut app = test_app("update-test-window-id.jpg");
        assert!(app.window_id.is_none());

        let id = window::Id::unique();
        let _ = update(&mut app, Message::LatestWindowFetched(Some(id)));
        assert_eq!(app.window_id, Some(id));

        // A later empty fetch must not clear a known id.
        let _ = update(&mut app, Message::LatestWindowFetched(None));
        assert_eq!(app.window_id, Some(id));
    }
}
