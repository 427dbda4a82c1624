// SPDX-License-Identifier: MPL-2.0
//! Theme mode, effective appearance and the colors derived from them.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors for the page chrome that does not come from the iced theme
/// palette: header toggles, toasts and the lightbox backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub surface: Color,
    pub text: Color,
    pub accent: Color,

    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::MIST_100,
            text: palette::NIGHT_900,
            accent: palette::GOLD_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::NIGHT_700,
            text: palette::WHITE,
            accent: palette::GOLD_400,

            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }
}

/// User preference for the page theme, as persisted in `settings.toml`.
///
/// A first visit with nothing saved gets the dark page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Resolves the preference to a concrete appearance.
    #[must_use]
    pub fn appearance(self) -> Appearance {
        match self {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                if matches!(dark_light::detect(), Ok(dark_light::Mode::Light)) {
                    Appearance::Light
                } else {
                    Appearance::Dark
                }
            }
        }
    }

    /// Mode selected by the header toggle: flips the effective appearance.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self.appearance() {
            Appearance::Light => ThemeMode::Dark,
            Appearance::Dark => ThemeMode::Light,
        }
    }
}

/// Concrete light/dark appearance in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            Appearance::Light => Theme::Light,
            Appearance::Dark => Theme::Dark,
        }
    }
}

/// The "is light theme" signal read by the render loop on every frame.
pub trait ThemeSignal {
    fn is_light(&self) -> bool;
}

impl ThemeSignal for Appearance {
    fn is_light(&self) -> bool {
        *self == Appearance::Light
    }
}

impl ThemeSignal for ThemeMode {
    fn is_light(&self) -> bool {
        self.appearance() == Appearance::Light
    }
}

/// Star fill color: black-based on light pages, white-based on dark ones.
#[must_use]
pub fn star_color(is_light: bool, alpha: f32) -> Color {
    let base = if is_light {
        palette::BLACK
    } else {
        palette::WHITE
    };
    Color {
        a: alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
        ..base
    }
}
