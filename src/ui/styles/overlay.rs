// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay styles.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius};
use crate::ui::theming::{Appearance, ColorScheme};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed backdrop covering the page while the lightbox is open.
pub fn backdrop(appearance: Appearance) -> impl Fn(&Theme) -> container::Style {
    let scheme = ColorScheme::for_appearance(appearance);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.overlay_background)),
        text_color: Some(scheme.overlay_text),
        ..Default::default()
    }
}

/// Caption block under the enlarged image.
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..Color::BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
