// SPDX-License-Identifier: MPL-2.0
//! Process-wide viewer notifications.
//!
//! Opening and closing the zoom overlay and fullscreen transitions are
//! broadcast on a single global channel, not scoped to any component
//! instance. Publication is non-blocking: when nobody listens, or a
//! subscriber lags behind the channel capacity, events are dropped.

use crate::config::EVENT_BUS_CAPACITY;
use crate::ui::state::CloseReason;
use std::sync::OnceLock;
use tokio::sync::broadcast;

/// A notification emitted by the viewer component.
///
/// `image` always carries the primary image source, even when the overlay
/// displayed a higher-resolution zoom variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// The zoom overlay was opened.
    Opened { image: String },
    /// The zoom overlay was closed.
    Closed { image: String, reason: CloseReason },
    /// Fullscreen actually transitioned (confirmed by the platform).
    FullscreenChanged { image: String, enabled: bool },
}

/// Broadcast hub for [`ViewerEvent`]s.
///
/// Handles to the hub are cheap; subscribers each receive every event
/// published after they subscribed.
#[derive(Debug)]
pub struct EventBus {
    tx: broadcast::Sender<ViewerEvent>,
}

impl EventBus {
    fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publishes an event to all current subscribers.
    ///
    /// Never blocks and never fails; an event with no subscribers is
    /// simply dropped.
    pub fn publish(&self, event: ViewerEvent) {
        let _ = self.tx.send(event);
    }

    /// Creates a new subscription receiving all subsequently published events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ViewerEvent> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Returns the process-wide event bus.
pub fn bus() -> &'static EventBus {
    static BUS: OnceLock<EventBus> = OnceLock::new();
    BUS.get_or_init(|| EventBus::new(EVENT_BUS_CAPACITY))
}
