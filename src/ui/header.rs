// SPDX-License-Identifier: MPL-2.0
//! Page header with the title and the theme and language toggles.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::Appearance;
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub appearance: Appearance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleTheme,
    ToggleLanguage,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    // The toggle names the mode it switches to.
    let theme_label = match ctx.appearance {
        Appearance::Light => ctx.i18n.tr("toggle-theme-dark"),
        Appearance::Dark => ctx.i18n.tr("toggle-theme-light"),
    };

    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(text(ctx.i18n.tr("page-title")).size(typography::TITLE_LG))
        .push(text(ctx.i18n.tr("page-subtitle")).size(typography::BODY_LG));

    let toggles = Row::new()
        .spacing(spacing::XS)
        .push(
            button(text(theme_label).size(typography::BODY))
                .on_press(Message::ToggleTheme)
                .style(styles::button::toggle(ctx.appearance)),
        )
        .push(
            button(text(ctx.i18n.tr("toggle-language")).size(typography::BODY))
                .on_press(Message::ToggleLanguage)
                .style(styles::button::toggle(ctx.appearance)),
        );

    container(
        Row::new()
            .align_y(Vertical::Center)
            .push(titles)
            .push(Space::new().width(Length::Fill))
            .push(toggles),
    )
    .padding([spacing::MD, spacing::LG])
    .width(Length::Fill)
    .style(styles::container::header)
    .into()
}
