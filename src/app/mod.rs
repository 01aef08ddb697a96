// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the viewer component.
//!
//! The `App` struct wires together the viewer, localization, and
//! configuration, and translates viewer effects into side effects like
//! window mode changes and event publication. Policy decisions (window
//! sizing, flag/config precedence) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::state::CloseSettleDelay;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component;
use crate::ui::viewer::sources::{self, ImageSources, Loading};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state bridging the viewer component,
/// localization, and preferences.
pub struct App {
    pub i18n: I18n,
    viewer: component::State,
    window_id: Option<window::Id>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("zoomed", &self.viewer.is_zoomed())
            .field("fullscreen", &self.viewer.is_fullscreen())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 240;
pub const MAX_WINDOW_WIDTH: u32 = 1600;
pub const MAX_WINDOW_HEIGHT: u32 = 1000;

/// Builds the window settings, sized to the image when its header is
/// readable and falling back to defaults otherwise.
pub fn window_settings_for(source: &Path) -> window::Settings {
    let size = match sources::probe_dimensions(source) {
        Ok((width, height)) => Size::new(
            (width as f32).clamp(MIN_WINDOW_WIDTH as f32, MAX_WINDOW_WIDTH as f32),
            (height as f32).clamp(MIN_WINDOW_HEIGHT as f32, MAX_WINDOW_HEIGHT as f32),
        ),
        Err(error) => {
            eprintln!("Failed to read image dimensions: {}", error);
            Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
        }
    };

    window::Settings {
        size,
        min_size: Some(Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());
    let (config, config_warning) = config::load();
    if let Some(warning) = &config_warning {
        eprintln!("Failed to load config: {}", warning);
    }

    let Some(source) = flags.source.clone().or_else(|| config.image.source.clone()) else {
        eprintln!("No image source given; pass a path or set [image] source in settings.toml");
        std::process::exit(2);
    };
    if !source.exists() {
        eprintln!("Image not found: {}", source.display());
    }

    let settings = window_settings_for(&source);

    // Wrap boot state in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming it once (iced 0.14 requires Fn,
    // not FnOnce)
    let boot_state = RefCell::new(Some((flags, config, source)));
    let boot = move || {
        let (flags, config, source) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, config, source)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the window id query.
    fn new(flags: Flags, config: Config, source: PathBuf) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let viewer = component::State::new(resolve_viewer_config(&flags, &config, source));

        let app = App {
            i18n,
            viewer,
            window_id: None,
            theme_mode: config.general.theme_mode,
        };

        (app, window::get_latest().map(Message::LatestWindowFetched))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-name");
        match self.viewer.sources().file_name() {
            Some(file) => format!("{} - {}", file, app_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.viewer.is_zoomed())
    }
}

/// Merges CLI flags over file configuration into the viewer's config.
/// Flags win wherever both are present.
fn resolve_viewer_config(
    flags: &Flags,
    config: &Config,
    source: PathBuf,
) -> component::StateConfig {
    let image = &config.image;

    component::StateConfig {
        sources: ImageSources::new(
            source,
            flags
                .zoom_source
                .clone()
                .or_else(|| image.zoom_source.clone()),
        ),
        auto_mode: flags.auto_mode.or(image.auto_mode).unwrap_or_default(),
        width: image.width,
        height: image.height,
        disable_zoom: flags.disable_zoom || image.disable_zoom.unwrap_or(false),
        title: flags.title.clone().or_else(|| image.title.clone()),
        loading: if flags.eager {
            Loading::Eager
        } else {
            image.loading.unwrap_or_default()
        },
        close_delay: CloseSettleDelay::new(
            config
                .overlay
                .close_settle_delay_ms
                .unwrap_or(config::DEFAULT_CLOSE_SETTLE_MS),
        ),
    }
}
