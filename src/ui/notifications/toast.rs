// SPDX-License-Identifier: MPL-2.0
//! Toast cards stacked in the bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::theming::{Appearance, ColorScheme};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{Background, Border, Color, Element, Length, Theme};

fn toast<'a>(
    notification: &'a Notification,
    i18n: &'a I18n,
    scheme: ColorScheme,
) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let dismiss = button(text("×").size(typography::BODY_LG))
        .padding([0.0, spacing::XXS])
        .on_press(Message::Dismiss(notification.id()))
        .style(move |_theme: &Theme, status| dismiss_style(scheme, status));

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Container::new(text(i18n.tr(notification.message_key())).size(typography::BODY))
                .width(Length::Fill),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |_theme: &Theme| toast_style(scheme, accent))
        .into()
}

/// Every visible toast, anchored bottom-right over the whole window.
pub fn view_overlay<'a>(
    manager: &'a Manager,
    i18n: &'a I18n,
    appearance: Appearance,
) -> Element<'a, Message> {
    let scheme = ColorScheme::for_appearance(appearance);
    let column = manager
        .visible()
        .fold(Column::new().spacing(spacing::XS), |column, notification| {
            column.push(toast(notification, i18n, scheme))
        })
        .align_x(Horizontal::Right);

    container(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn toast_style(scheme: ColorScheme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme.surface)),
        text_color: Some(scheme.text),
        border: Border {
            color: accent,
            width: 2.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

fn dismiss_style(scheme: ColorScheme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..scheme.text
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: scheme.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
