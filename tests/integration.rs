// SPDX-License-Identifier: MPL-2.0
use iced::window;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use zoombox::config::{self, Config};
use zoombox::i18n::fluent::I18n;
use zoombox::ui::state::{AutoMode, CloseReason, CloseSettleDelay};
use zoombox::ui::viewer::component::{Effect, Message, State, StateConfig, Surface};
use zoombox::ui::viewer::controls;
use zoombox::ui::viewer::sources::{ImageSources, Loading};

fn viewer(source: &str, zoom: Option<&str>) -> State {
    State::new(StateConfig {
        sources: ImageSources::new(PathBuf::from(source), zoom.map(PathBuf::from)),
        auto_mode: AutoMode::default(),
        width: None,
        height: None,
        disable_zoom: false,
        title: None,
        loading: Loading::Lazy,
        close_delay: CloseSettleDelay::default(),
    })
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("controls-close-tooltip"), "Close");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("controls-close-tooltip"), "Fermer");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_overlay_settings_survive_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.image.source = Some(PathBuf::from("shot.png"));
    config.image.auto_mode = Some(AutoMode::None);
    config.overlay.close_settle_delay_ms = Some(300);

    config::save_to_path(&config, &path).expect("Failed to save config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    assert_eq!(loaded.image.source, Some(PathBuf::from("shot.png")));
    assert_eq!(loaded.image.auto_mode, Some(AutoMode::None));
    assert_eq!(loaded.overlay.close_settle_delay_ms, Some(300));
}

#[test]
fn test_full_overlay_lifecycle() {
    let mut state = viewer("a.jpg", Some("a_hi.jpg"));
    let mut effects = Vec::new();

    // Open, enter fullscreen (request + platform confirmation), close via
    // the close control, exit settles, then the deferred close fires.
    let script = [
        Message::SurfacePressed(Surface::InlineImage),
        Message::Controls(controls::Message::ToggleFullscreen),
        Message::ModeConfirmed(window::Mode::Fullscreen),
        Message::Controls(controls::Message::Close),
        Message::ModeConfirmed(window::Mode::Windowed),
        Message::CloseSettled,
    ];
    for message in script {
        let (effect, _task) = state.handle_message(message);
        effects.push(effect);
    }

    assert_eq!(
        effects,
        vec![
            Effect::Opened {
                image: "a.jpg".to_string()
            },
            Effect::SetWindowMode(window::Mode::Fullscreen),
            Effect::FullscreenChanged {
                image: "a.jpg".to_string(),
                enabled: true,
            },
            Effect::SetWindowMode(window::Mode::Windowed),
            Effect::FullscreenChanged {
                image: "a.jpg".to_string(),
                enabled: false,
            },
            Effect::Closed {
                image: "a.jpg".to_string(),
                reason: CloseReason::CloseButton,
            },
        ]
    );
    assert!(!state.is_zoomed());
    assert_eq!(state.sources().zoom_source(), Path::new("a_hi.jpg"));
}

#[test]
fn test_viewer_built_from_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.image.zoom_source = Some(PathBuf::from("hi.png"));
    config.image.disable_zoom = Some(true);
    config::save_to_path(&config, &path).expect("Failed to save config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let mut state = State::new(StateConfig {
        sources: ImageSources::new(PathBuf::from("lo.png"), loaded.image.zoom_source.clone()),
        auto_mode: loaded.image.auto_mode.unwrap_or_default(),
        width: loaded.image.width,
        height: loaded.image.height,
        disable_zoom: loaded.image.disable_zoom.unwrap_or(false),
        title: loaded.image.title.clone(),
        loading: loaded.image.loading.unwrap_or_default(),
        close_delay: CloseSettleDelay::default(),
    });

    // disable_zoom from the file makes the inline press inert.
    let (effect, _task) = state.handle_message(Message::SurfacePressed(Surface::InlineImage));
    assert_eq!(effect, Effect::None);
    assert!(!state.is_zoomed());
}
