//! Application builder and runtime configuration.

use iced::{Settings, Size, Theme};

use crate::state::State;
use crate::{subscriptions, theme, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Default window width; the window opens and stays landscape.
pub const WINDOW_WIDTH: f32 = 1280.0;

/// Default window height.
pub const WINDOW_HEIGHT: f32 = 720.0;

/// Smallest allowed window, also landscape.
pub const MIN_WINDOW_WIDTH: f32 = 960.0;

/// Smallest allowed window height.
pub const MIN_WINDOW_HEIGHT: f32 = 540.0;

/// Build and run the application with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    iced::application("Marquee", update::update, view::view)
        .settings(default_settings())
        .subscription(subscriptions::subscription)
        .theme(app_theme)
        .window(window_settings())
        .run_with(move || bootstrap::runtime_boot(&config))
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("marquee".to_string());
    settings.antialiasing = true;
    settings
}

fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        position: iced::window::Position::Centered,
        resizable: true,
        decorations: true,
        transparent: false,
        ..Default::default()
    }
}

fn app_theme(_state: &State) -> Theme {
    theme::CarouselTheme::theme()
}
