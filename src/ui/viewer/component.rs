// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component renders the inline image and, while zoomed, a modal
//! overlay with the zoom image and its controls. Window-level side effects
//! (mode changes, event publication) are returned as [`Effect`] values for
//! the application update loop to apply; the fullscreen flag itself is only
//! updated when the platform confirms a mode change via
//! [`Message::ModeConfirmed`].

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::state::{AutoMode, CloseReason, CloseSettleDelay, ViewState};
use crate::ui::styles;
use crate::ui::viewer::controls;
use crate::ui::viewer::sources::{ImageSources, Loading};
use iced::widget::image::Handle;
use iced::widget::{
    center, container, image, mouse_area, opaque, stack, text, tooltip, Column, Row, Space,
};
use iced::{event, keyboard, mouse, window, ContentFit, Element, Length, Task};

/// Messages consumed by the viewer component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A pointer press classified by the surface it landed on.
    SurfacePressed(Surface),
    Controls(controls::Message),
    /// The platform reported the actual window mode (after a local request
    /// or an externally initiated change).
    ModeConfirmed(window::Mode),
    /// The close-settle delay elapsed after a fullscreen-exit close.
    CloseSettled,
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// What a pointer press landed on.
///
/// Dismissal is decided by capability, not by widget identity comparisons:
/// surfaces that are part of the zoom UI keep the overlay open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The inline image shown while the overlay is closed.
    InlineImage,
    /// The zoomed image inside the overlay.
    ZoomedImage,
    /// The overlay control bar.
    Controls,
    /// The backdrop around the zoom UI.
    Backdrop,
}

impl Surface {
    /// Whether a press on this surface opens the overlay.
    #[must_use]
    pub fn opens_zoom(self) -> bool {
        matches!(self, Surface::InlineImage)
    }

    /// Whether a press on this surface dismisses the overlay.
    #[must_use]
    pub fn dismisses_overlay(self) -> bool {
        matches!(self, Surface::Backdrop)
    }
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The overlay was opened.
    Opened { image: String },
    /// The overlay was closed.
    Closed { image: String, reason: CloseReason },
    /// The fullscreen flag actually transitioned.
    FullscreenChanged { image: String, enabled: bool },
    /// Request the given window mode, then confirm the resulting mode back
    /// via [`Message::ModeConfirmed`].
    SetWindowMode(window::Mode),
    /// Query the current window mode and confirm it back. Used to detect
    /// externally initiated fullscreen exits.
    SyncWindowMode,
}

/// Configuration resolved from CLI flags and the config file.
#[derive(Debug, Clone)]
pub struct StateConfig {
    pub sources: ImageSources,
    pub auto_mode: AutoMode,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub disable_zoom: bool,
    pub title: Option<String>,
    pub loading: Loading,
    pub close_delay: CloseSettleDelay,
}

/// Environment information required to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Complete viewer component state.
pub struct State {
    sources: ImageSources,
    auto_mode: AutoMode,
    supplied_width: Option<f32>,
    supplied_height: Option<f32>,
    disable_zoom: bool,
    title: Option<String>,
    close_delay: CloseSettleDelay,
    view_state: ViewState,
    /// Set while a close-button close waits for the fullscreen exit to settle.
    pending_close: bool,
    inline_handle: Handle,
    zoom_handle: Option<Handle>,
}

impl State {
    #[must_use]
    pub fn new(config: StateConfig) -> Self {
        let inline_handle = Handle::from_path(config.sources.source());
        let zoom_handle = match config.loading {
            Loading::Eager => Some(Handle::from_path(config.sources.zoom_source())),
            Loading::Lazy => None,
        };

        Self {
            sources: config.sources,
            auto_mode: config.auto_mode,
            supplied_width: config.width,
            supplied_height: config.height,
            disable_zoom: config.disable_zoom,
            title: config.title.filter(|t| !t.is_empty()),
            close_delay: config.close_delay,
            view_state: ViewState::default(),
            pending_close: false,
            inline_handle,
            zoom_handle,
        }
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.view_state.is_zoomed()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.view_state.is_fullscreen()
    }

    #[must_use]
    pub fn sources(&self) -> &ImageSources {
        &self.sources
    }

    /// Whether the zoom image handle has been materialized.
    #[must_use]
    pub fn zoom_image_ready(&self) -> bool {
        self.zoom_handle.is_some()
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::SurfacePressed(surface) => self.handle_surface_pressed(surface),
            Message::Controls(controls::Message::ToggleFullscreen) => {
                self.handle_fullscreen_toggle()
            }
            Message::Controls(controls::Message::Close) => self.handle_close_control(),
            Message::ModeConfirmed(mode) => self.handle_mode_confirmed(mode),
            Message::CloseSettled => self.handle_close_settled(),
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
        }
    }

    fn handle_surface_pressed(&mut self, surface: Surface) -> (Effect, Task<Message>) {
        if surface.opens_zoom() {
            if self.disable_zoom || !self.view_state.open() {
                return (Effect::None, Task::none());
            }
            self.ensure_zoom_handle();
            return (
                Effect::Opened {
                    image: self.sources.display_name(),
                },
                Task::none(),
            );
        }

        // Backdrop dismissal is suppressed in fullscreen; exiting goes
        // through the controls or the platform.
        if surface.dismisses_overlay()
            && self.view_state.is_zoomed()
            && !self.view_state.is_fullscreen()
        {
            return self.close_with(CloseReason::OverlayClick);
        }

        (Effect::None, Task::none())
    }

    fn handle_fullscreen_toggle(&mut self) -> (Effect, Task<Message>) {
        if !self.view_state.is_zoomed() {
            return (Effect::None, Task::none());
        }
        let mode = if self.view_state.is_fullscreen() {
            window::Mode::Windowed
        } else {
            window::Mode::Fullscreen
        };
        // The flag flips in `handle_mode_confirmed`, once the platform
        // reports the change. A declined request leaves state unchanged.
        (Effect::SetWindowMode(mode), Task::none())
    }

    fn handle_close_control(&mut self) -> (Effect, Task<Message>) {
        if !self.view_state.is_zoomed() || self.pending_close {
            return (Effect::None, Task::none());
        }

        if self.view_state.is_fullscreen() {
            // Leave fullscreen first, close once the mode change settled.
            self.pending_close = true;
            let delay = self.close_delay.as_duration();
            let settle = Task::perform(tokio::time::sleep(delay), |_| Message::CloseSettled);
            return (Effect::SetWindowMode(window::Mode::Windowed), settle);
        }

        self.close_with(CloseReason::CloseButton)
    }

    fn handle_mode_confirmed(&mut self, mode: window::Mode) -> (Effect, Task<Message>) {
        if !self.view_state.is_zoomed() {
            return (Effect::None, Task::none());
        }
        let enabled = mode == window::Mode::Fullscreen;
        if self.view_state.set_fullscreen(enabled) {
            return (
                Effect::FullscreenChanged {
                    image: self.sources.display_name(),
                    enabled,
                },
                Task::none(),
            );
        }
        (Effect::None, Task::none())
    }

    fn handle_close_settled(&mut self) -> (Effect, Task<Message>) {
        if !self.pending_close {
            return (Effect::None, Task::none());
        }
        self.close_with(CloseReason::CloseButton)
    }

    fn handle_raw_event(&mut self, raw: event::Event) -> (Effect, Task<Message>) {
        match raw {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => self.handle_escape(),
            event::Event::Window(window::Event::Resized(_))
                if self.view_state.is_fullscreen() =>
            {
                // The platform may have dropped fullscreen behind our back.
                (Effect::SyncWindowMode, Task::none())
            }
            _ => (Effect::None, Task::none()),
        }
    }

    fn handle_escape(&mut self) -> (Effect, Task<Message>) {
        // Suppressed in fullscreen; the platform owns Escape there.
        if !self.view_state.is_zoomed() || self.view_state.is_fullscreen() {
            return (Effect::None, Task::none());
        }
        self.close_with(CloseReason::Escape)
    }

    fn close_with(&mut self, reason: CloseReason) -> (Effect, Task<Message>) {
        self.pending_close = false;
        if !self.view_state.close() {
            return (Effect::None, Task::none());
        }
        (
            Effect::Closed {
                image: self.sources.display_name(),
                reason,
            },
            Task::none(),
        )
    }

    fn ensure_zoom_handle(&mut self) {
        if self.zoom_handle.is_none() {
            self.zoom_handle = Some(Handle::from_path(self.sources.zoom_source()));
        }
    }

    fn zoom_view_handle(&self) -> Handle {
        self.zoom_handle
            .clone()
            .unwrap_or_else(|| Handle::from_path(self.sources.zoom_source()))
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let inline = self.inline_view();
        if !self.view_state.is_zoomed() {
            return inline;
        }
        stack![inline, self.overlay_view(env.i18n)].into()
    }

    fn inline_view(&self) -> Element<'_, Message> {
        let (width, height) = self
            .auto_mode
            .resolve(self.supplied_width, self.supplied_height);

        let inline = image(self.inline_handle.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Contain);

        let mut area = mouse_area(self.with_title_tooltip(inline.into()))
            .on_press(Message::SurfacePressed(Surface::InlineImage));
        if !self.disable_zoom {
            area = area.interaction(mouse::Interaction::Pointer);
        }

        center(area).into()
    }

    fn overlay_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let controls = container(
            controls::view(controls::ViewContext {
                i18n,
                fullscreen: self.view_state.is_fullscreen(),
            })
            .map(Message::Controls),
        )
        .style(styles::overlay::controls_container);

        let controls_row = Row::new()
            .width(Length::Fill)
            .push(Space::new(Length::Fill, Length::Shrink))
            .push(controls);

        let zoomed = image(self.zoom_view_handle())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain);
        let zoomed = mouse_area(self.with_title_tooltip(zoomed.into()))
            .on_press(Message::SurfacePressed(Surface::ZoomedImage));

        let content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .width(Length::Fill)
            .height(Length::Fill)
            .push(controls_row)
            .push(zoomed);

        // Presses on the zoom UI are captured by the inner areas; anything
        // else reaches the backdrop and dismisses the overlay.
        opaque(
            mouse_area(center(content).style(styles::overlay::backdrop))
                .on_press(Message::SurfacePressed(Surface::Backdrop)),
        )
    }

    fn with_title_tooltip<'a>(&'a self, content: Element<'a, Message>) -> Element<'a, Message> {
        match &self.title {
            Some(title) => tooltip(
                content,
                container(text(title.as_str()))
                    .padding(spacing::XS)
                    .style(styles::tooltip::style),
                tooltip::Position::Bottom,
            )
            .into(),
            None => content,
        }
    }
}
