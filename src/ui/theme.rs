//! Color palette, one per process

use crate::infrastructure::ThemeMode;
use ratatui::style::Color;

/// The palette every render function draws from. Built once from the
/// config at startup; no view carries its own colors.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub accent_strong: Color,
    pub surface: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub danger: Color,
}

impl Theme {
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// The original app's dark palette: lavender accent on near-black.
    pub fn dark() -> Self {
        Theme {
            accent: Color::Rgb(194, 186, 250),
            accent_strong: Color::Rgb(148, 148, 252),
            surface: Color::Rgb(31, 31, 31),
            text: Color::Rgb(235, 235, 235),
            text_secondary: Color::Rgb(140, 140, 148),
            danger: Color::Rgb(235, 105, 105),
        }
    }

    pub fn light() -> Self {
        Theme {
            accent: Color::Rgb(94, 84, 190),
            accent_strong: Color::Rgb(74, 64, 180),
            surface: Color::Rgb(235, 235, 240),
            text: Color::Rgb(25, 25, 30),
            text_secondary: Color::Rgb(110, 110, 120),
            danger: Color::Rgb(190, 55, 55),
        }
    }
}
