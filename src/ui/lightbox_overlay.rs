// SPDX-License-Identifier: MPL-2.0
//! Full-window lightbox drawn over the page while an artwork is open.
//!
//! Every interactive region emits the [`PointerTarget`] it represents. The
//! backdrop layer only receives presses that no control above it captured,
//! which is what lets a press outside the content close the lightbox.

use crate::i18n::I18n;
use crate::lightbox::dispatch::PointerTarget;
use crate::lightbox::{Caption, LightboxDisplay};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::Appearance;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, container, image, mouse_area, opaque, text, tooltip, Column, Row, Stack,
};
use iced::{ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub display: &'a LightboxDisplay,
    pub appearance: Appearance,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, PointerTarget> {
    let backdrop = opaque(
        mouse_area(
            container(text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::backdrop(ctx.appearance)),
        )
        .on_press(PointerTarget::Overlay),
    );

    // The shrunk image hugs the fitted picture, so presses on the empty
    // bands around it fall through to the backdrop.
    let picture = mouse_area(tooltip(
        image(image::Handle::from_path(ctx.display.image()))
            .content_fit(ContentFit::Contain)
            .width(Length::Shrink)
            .height(Length::Shrink),
        text(ctx.display.alt.as_str()).size(typography::CAPTION),
        tooltip::Position::Bottom,
    ))
    .on_press(PointerTarget::Image);

    let body = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .height(Length::Fill)
        .push(
            container(picture)
                .center_x(Length::Fill)
                .height(Length::FillPortion(5))
                .align_y(Vertical::Center),
        )
        .push(caption(&ctx));

    let content = Row::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_y(Vertical::Center)
        .push(control(ctx.i18n, PointerTarget::PreviousArrow))
        .push(container(body).center_x(Length::Fill))
        .push(control(ctx.i18n, PointerTarget::NextArrow));

    let close = container(control(ctx.i18n, PointerTarget::CloseControl))
        .padding(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(container(content).center(Length::Fill))
        .push(close)
        .into()
}

fn caption<'a>(ctx: &ViewContext<'a>) -> Element<'a, PointerTarget> {
    let display = ctx.display;
    let name = text(display.name.as_str()).size(typography::TITLE_MD);

    let description: Element<'a, PointerTarget> = match &display.caption {
        Caption::Plain(description) => text(description.as_str()).size(typography::BODY).into(),
        Caption::WithLink { description, .. } => Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(text(description.as_str()).size(typography::BODY))
            .push(
                button(text(ctx.i18n.tr("lightbox-link-to-artist")).size(typography::BODY))
                    .padding(0)
                    .on_press(PointerTarget::ArtistLink)
                    .style(styles::button::link),
            )
            .into(),
    };

    let block = container(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(name)
            .push(description),
    )
    .padding(spacing::MD)
    .max_width(sizing::CAPTION_WIDTH)
    .style(styles::overlay::caption);

    mouse_area(block).on_press(PointerTarget::Caption).into()
}

/// Glyph and tooltip key of a navigation control.
fn control_face(target: PointerTarget) -> Option<(&'static str, &'static str)> {
    match target {
        PointerTarget::PreviousArrow => Some(("‹", "lightbox-previous")),
        PointerTarget::NextArrow => Some(("›", "lightbox-next")),
        PointerTarget::CloseControl => Some(("×", "lightbox-close")),
        _ => None,
    }
}

fn control<'a>(i18n: &I18n, target: PointerTarget) -> Element<'a, PointerTarget> {
    let Some((glyph, label_key)) = control_face(target) else {
        return text("").into();
    };

    let face = button(
        container(text(glyph).size(typography::TITLE_LG)).center(Length::Fixed(sizing::CONTROL)),
    )
    .padding(0)
    .on_press(target)
    .style(styles::button::overlay(
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));

    tooltip(
        face,
        text(i18n.tr(label_key)).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}
