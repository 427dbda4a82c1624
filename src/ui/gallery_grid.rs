// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid. Pressing a thumbnail emits its gallery position.

use crate::gallery::GalleryIndex;
use crate::i18n::I18n;
use crate::lightbox::dispatch::PointerTarget;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, image, text, tooltip, Column, Row};
use iced::{ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryIndex,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, PointerTarget> {
    if ctx.gallery.is_empty() {
        return container(text(ctx.i18n.tr("gallery-empty")).size(typography::BODY))
            .padding(spacing::LG)
            .center_x(Length::Fill)
            .into();
    }

    let mut rows = Column::new().spacing(spacing::MD);
    let mut row = Row::new().spacing(spacing::MD);

    for (index, artwork) in ctx.gallery.iter().enumerate() {
        let picture = image(image::Handle::from_path(artwork.image_source()))
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .content_fit(ContentFit::Cover);

        let thumbnail = button(picture)
            .padding(spacing::XXS)
            .on_press(PointerTarget::Thumbnail(index))
            .style(styles::button::thumbnail);

        row = row.push(tooltip(
            thumbnail,
            text(artwork.alt_text()).size(typography::CAPTION),
            tooltip::Position::Bottom,
        ));

        if (index + 1) % sizing::GALLERY_COLUMNS == 0 {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::MD);
        }
    }

    if ctx.gallery.len() % sizing::GALLERY_COLUMNS != 0 {
        rows = rows.push(row);
    }

    container(rows).center_x(Length::Fill).into()
}
