//! Dark theme and widget styles for the carousel.

use iced::{
    Background, Border, Color, Shadow, Theme, Vector, border, theme,
    widget::{button, container},
};

/// Dark theme with a five-color card palette.
#[derive(Debug, Clone, Copy)]
pub struct CarouselTheme;

impl CarouselTheme {
    // Core colors
    pub const BACKGROUND: Color = Color::from_rgb(0.04, 0.04, 0.06);
    pub const SURFACE: Color = Color::from_rgb(0.10, 0.10, 0.13);
    pub const ACCENT: Color = Color::from_rgb(0.35, 0.55, 1.0);

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.5, 0.5, 0.5);

    /// Card colors, indexed by `Item::palette_slot`.
    pub const ITEM_PALETTE: [Color; 5] = [
        Color::from_rgb(0.91, 0.30, 0.24), // red
        Color::from_rgb(0.95, 0.61, 0.07), // amber
        Color::from_rgb(0.15, 0.68, 0.38), // green
        Color::from_rgb(0.16, 0.50, 0.73), // blue
        Color::from_rgb(0.56, 0.27, 0.68), // violet
    ];

    /// Build the application theme over a patched dark palette.
    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;

        Theme::custom("Marquee Dark".to_string(), palette)
    }

    /// Style for an item card of the given palette color.
    pub fn card(color: Color) -> impl Fn(&Theme) -> container::Style {
        move |_theme| container::Style {
            text_color: Some(Self::TEXT_PRIMARY),
            background: Some(Background::Color(color)),
            border: border::rounded(16.0),
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.45),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 18.0,
            },
        }
    }

    /// Style for the pulsing previous/next controls.
    pub fn nav_button(_theme: &Theme, status: button::Status) -> button::Style {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Self::ACCENT,
            _ => Self::SURFACE,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: Self::TEXT_PRIMARY,
            border: Border {
                color: Color::from_rgba(1.0, 1.0, 1.0, 0.12),
                width: 1.0,
                radius: 24.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
                offset: Vector::new(0.0, 3.0),
                blur_radius: 10.0,
            },
        }
    }
}
