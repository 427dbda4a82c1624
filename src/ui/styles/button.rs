// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use crate::ui::theming::{Appearance, ColorScheme};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round translucent button for the lightbox arrows and close control.
pub fn overlay(
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => alpha_hover,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Header toggle (theme, language), colored from the page's scheme.
pub fn toggle(appearance: Appearance) -> impl Fn(&Theme, button::Status) -> button::Style {
    let scheme = ColorScheme::for_appearance(appearance);
    move |_theme: &Theme, status: button::Status| {
        let border_color = match status {
            button::Status::Hovered => scheme.accent,
            _ => palette::DUSK_400,
        };

        button::Style {
            background: Some(Background::Color(scheme.surface)),
            text_color: scheme.text,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}

/// Inline text link inside the lightbox caption.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GOLD_400,
        _ => Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::GOLD_400
        },
    };

    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Borderless button wrapping a gallery thumbnail.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.base.color,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: None,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_follows_appearance_scheme() {
        let light = toggle(Appearance::Light)(&Theme::Light, button::Status::Active);
        assert_eq!(light.text_color, palette::NIGHT_900);
        assert_eq!(light.border.color, palette::DUSK_400);

        let hovered = toggle(Appearance::Dark)(&Theme::Dark, button::Status::Hovered);
        assert_eq!(hovered.text_color, WHITE);
        assert_eq!(hovered.border.color, ColorScheme::dark().accent);
    }
}
