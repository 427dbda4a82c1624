// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a stack: the star field at the back, the scrollable page
//! content over it, the lightbox while it is open, and toasts on top.

use super::Message;
use crate::gallery::GalleryIndex;
use crate::i18n::I18n;
use crate::lightbox::LightboxDisplay;
use crate::render_loop::DrawList;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::Appearance;
use crate::ui::widgets::StarCanvas;
use crate::ui::{details, gallery_grid, header, lightbox_overlay, notifications, styles};
use iced::widget::{container, scrollable, text, Column, Stack};
use iced::{Element, Length};
use std::time::Duration;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub appearance: Appearance,
    pub stars: &'a DrawList,
    pub gallery: &'a GalleryIndex,
    pub lightbox: Option<&'a LightboxDisplay>,
    pub details: &'a details::State,
    pub notifications: &'a notifications::Manager,
    pub now: Duration,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_view = header::view(header::ViewContext {
        i18n: ctx.i18n,
        appearance: ctx.appearance,
    })
    .map(Message::Header);

    let gallery_panel = panel(
        ctx.i18n.tr("section-gallery"),
        gallery_grid::view(gallery_grid::ViewContext {
            i18n: ctx.i18n,
            gallery: ctx.gallery,
        })
        .map(Message::Pointer),
    );

    let sections = container(
        details::view(details::ViewContext {
            i18n: ctx.i18n,
            state: ctx.details,
            now: ctx.now,
        })
        .map(Message::Details),
    )
    .padding(spacing::MD)
    .style(styles::container::panel);

    let page = Column::new()
        .push(header_view)
        .push(
            scrollable(
                Column::new()
                    .spacing(spacing::LG)
                    .padding(spacing::LG)
                    .push(gallery_panel)
                    .push(sections),
            )
            .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(StarCanvas::new(ctx.stars).into_element())
        .push(page);

    if let Some(display) = ctx.lightbox {
        layers = layers.push(
            lightbox_overlay::view(lightbox_overlay::ViewContext {
                i18n: ctx.i18n,
                display,
                appearance: ctx.appearance,
            })
            .map(Message::Pointer),
        );
    }

    if ctx.notifications.visible_count() > 0 {
        layers = layers.push(
            notifications::view_overlay(ctx.notifications, ctx.i18n, ctx.appearance)
                .map(Message::Notification),
        );
    }

    layers.into()
}

fn panel<'a>(title: String, body: Element<'a, Message>) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::MD)
            .push(text(title).size(typography::TITLE_MD))
            .push(body),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}
