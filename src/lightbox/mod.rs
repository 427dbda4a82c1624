// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller: which artwork is displayed, and how it is displayed.
//!
//! The controller is a two-state machine, `Closed` and `Open { index }`,
//! that owns the gallery it navigates. Every transition into `Open` rebuilds
//! the [`LightboxDisplay`] from scratch, so nothing from the previously shown
//! artwork can leak into the next one.
//!
//! Input binding (which click or key triggers which transition) lives in
//! [`dispatch`]; this module only knows about transitions.

pub mod dispatch;

use crate::error::LightboxError;
use crate::gallery::{ArtworkRecord, GalleryIndex};
use std::path::{Path, PathBuf};

/// Whether the lightbox is showing an artwork, and which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// Caption shown under the artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caption {
    /// Description only; the artwork has no external link.
    Plain(String),
    /// Description followed by a clickable artist link.
    WithLink { description: String, link: String },
}

impl Caption {
    fn for_record(record: &ArtworkRecord) -> Self {
        if record.has_external_link() {
            Caption::WithLink {
                description: record.description().to_string(),
                link: record.external_link().to_string(),
            }
        } else {
            Caption::Plain(record.description().to_string())
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Caption::Plain(description) | Caption::WithLink { description, .. } => description,
        }
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            Caption::Plain(_) => None,
            Caption::WithLink { link, .. } => Some(link),
        }
    }
}

/// Everything the lightbox overlay shows for the open artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxDisplay {
    pub image: PathBuf,
    pub alt: String,
    pub name: String,
    pub caption: Caption,
}

impl LightboxDisplay {
    fn render(record: &ArtworkRecord) -> Self {
        Self {
            image: record.image_source().to_path_buf(),
            alt: record.alt_text().to_string(),
            name: record.display_name().to_string(),
            caption: Caption::for_record(record),
        }
    }

    pub fn image(&self) -> &Path {
        &self.image
    }
}

/// Owns the lightbox state and the gallery it navigates.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    gallery: GalleryIndex,
    state: LightboxState,
    display: Option<LightboxDisplay>,
}

impl Lightbox {
    /// Creates a closed lightbox over `gallery`.
    pub fn new(gallery: GalleryIndex) -> Self {
        Self {
            gallery,
            state: LightboxState::Closed,
            display: None,
        }
    }

    pub fn gallery(&self) -> &GalleryIndex {
        &self.gallery
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Index of the displayed artwork, `None` while closed.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { index } => Some(index),
            LightboxState::Closed => None,
        }
    }

    /// What the overlay currently shows. `None` while closed.
    pub fn display(&self) -> Option<&LightboxDisplay> {
        self.display.as_ref()
    }

    /// Opens the lightbox on artwork `index`, from any state.
    ///
    /// Fails without changing state if `index` is not a valid gallery index.
    pub fn open(&mut self, index: usize) -> Result<(), LightboxError> {
        let count = self.gallery.len();
        if count == 0 {
            return Err(LightboxError::EmptyGallery);
        }
        let record = self
            .gallery
            .get(index)
            .ok_or(LightboxError::IndexOutOfRange { index, count })?;

        self.display = Some(LightboxDisplay::render(record));
        self.state = LightboxState::Open { index };
        tracing::debug!(index, name = record.display_name(), "lightbox showing artwork");
        Ok(())
    }

    /// Shows the following artwork, wrapping to the first after the last.
    ///
    /// Returns the new index, or `None` (and does nothing) while closed.
    pub fn next(&mut self) -> Option<usize> {
        let index = self.current_index()?;
        let next = (index + 1) % self.gallery.len();
        self.open(next).ok()?;
        Some(next)
    }

    /// Shows the preceding artwork, wrapping to the last before the first.
    ///
    /// Returns the new index, or `None` (and does nothing) while closed.
    pub fn previous(&mut self) -> Option<usize> {
        let index = self.current_index()?;
        let count = self.gallery.len();
        let previous = (index + count - 1) % count;
        self.open(previous).ok()?;
        Some(previous)
    }

    /// Hides the lightbox. Valid from any state.
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("lightbox closed");
        }
        self.state = LightboxState::Closed;
        self.display = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Thumbnail;

    fn gallery(count: usize) -> GalleryIndex {
        let thumbnails: Vec<Thumbnail> = (0..count)
            .map(|i| {
                let thumbnail = Thumbnail::new(format!("art-{i}.jpg"), format!("alt {i}"))
                    .with_name(format!("Artwork {i}"))
                    .with_description(format!("Description {i}"));
                if i % 2 == 0 {
                    thumbnail.with_link(format!("https://example.com/{i}"))
                } else {
                    thumbnail
                }
            })
            .collect();
        GalleryIndex::build(&thumbnails)
    }

    fn assert_displays(lightbox: &Lightbox, index: usize) {
        let record = lightbox.gallery().get(index).expect("record should exist");
        let display = lightbox.display().expect("lightbox should be open");
        assert_eq!(display.image(), record.image_source());
        assert_eq!(display.alt, record.alt_text());
        assert_eq!(display.name, record.display_name());
        assert_eq!(display.caption.description(), record.description());
        if record.has_external_link() {
            assert_eq!(display.caption.link(), Some(record.external_link()));
        } else {
            assert_eq!(display.caption.link(), None);
        }
    }

    #[test]
    fn new_lightbox_is_closed() {
        let lightbox = Lightbox::new(gallery(3));
        assert_eq!(lightbox.state(), LightboxState::Closed);
        assert!(!lightbox.is_open());
        assert!(lightbox.display().is_none());
    }

    #[test]
    fn open_renders_every_valid_index() {
        let mut lightbox = Lightbox::new(gallery(5));
        for i in 0..5 {
            lightbox.open(i).expect("open should succeed");
            assert_eq!(lightbox.state(), LightboxState::Open { index: i });
            assert_displays(&lightbox, i);
        }
    }

    #[test]
    fn next_walks_and_wraps() {
        let mut lightbox = Lightbox::new(gallery(3));
        lightbox.open(0).unwrap();

        assert_eq!(lightbox.next(), Some(1));
        assert_displays(&lightbox, 1);
        assert_eq!(lightbox.next(), Some(2));
        assert_displays(&lightbox, 2);
        assert_eq!(lightbox.next(), Some(0));
        assert_displays(&lightbox, 0);
    }

    #[test]
    fn next_count_times_returns_to_start() {
        let count = 7;
        for start in 0..count {
            let mut lightbox = Lightbox::new(gallery(count));
            lightbox.open(start).unwrap();
            for _ in 0..count {
                lightbox.next();
            }
            assert_eq!(lightbox.current_index(), Some(start));
        }
    }

    #[test]
    fn previous_undoes_next() {
        let count = 4;
        for start in 0..count {
            let mut lightbox = Lightbox::new(gallery(count));
            lightbox.open(start).unwrap();
            let before = lightbox.display().cloned();

            lightbox.next();
            lightbox.previous();

            assert_eq!(lightbox.current_index(), Some(start));
            assert_eq!(lightbox.display().cloned(), before);
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut lightbox = Lightbox::new(gallery(3));
        lightbox.open(0).unwrap();
        assert_eq!(lightbox.previous(), Some(2));
        assert_displays(&lightbox, 2);
    }

    #[test]
    fn single_artwork_navigation_stays_put() {
        let mut lightbox = Lightbox::new(gallery(1));
        lightbox.open(0).unwrap();
        assert_eq!(lightbox.next(), Some(0));
        assert_eq!(lightbox.previous(), Some(0));
    }

    #[test]
    fn navigation_while_closed_is_noop() {
        let mut lightbox = Lightbox::new(gallery(3));
        assert_eq!(lightbox.next(), None);
        assert_eq!(lightbox.previous(), None);
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn close_then_reopen_leaves_no_residue() {
        let mut lightbox = Lightbox::new(gallery(4));
        lightbox.open(0).unwrap();
        lightbox.close();

        assert_eq!(lightbox.state(), LightboxState::Closed);
        assert!(lightbox.display().is_none());

        lightbox.open(1).unwrap();
        assert_displays(&lightbox, 1);
        assert_eq!(lightbox.display().unwrap().caption.link(), None);
    }

    #[test]
    fn close_from_closed_is_harmless() {
        let mut lightbox = Lightbox::new(gallery(2));
        lightbox.close();
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn plain_caption_when_link_is_empty() {
        let thumbnails = [Thumbnail::new("a.jpg", "alt").with_description("Just text")];
        let mut lightbox = Lightbox::new(GalleryIndex::build(&thumbnails));
        lightbox.open(0).unwrap();

        assert_eq!(
            lightbox.display().unwrap().caption,
            Caption::Plain("Just text".to_string())
        );
    }

    #[test]
    fn open_out_of_range_is_rejected_without_state_change() {
        let mut lightbox = Lightbox::new(gallery(3));
        lightbox.open(1).unwrap();

        let err = lightbox.open(3).unwrap_err();

        assert_eq!(err, LightboxError::IndexOutOfRange { index: 3, count: 3 });
        assert_eq!(lightbox.state(), LightboxState::Open { index: 1 });
        assert_displays(&lightbox, 1);
    }

    #[test]
    fn empty_gallery_rejects_open_and_ignores_navigation() {
        let mut lightbox = Lightbox::new(GalleryIndex::default());
        assert_eq!(lightbox.open(0), Err(LightboxError::EmptyGallery));
        assert_eq!(lightbox.next(), None);
        assert_eq!(lightbox.previous(), None);
        assert!(!lightbox.is_open());
    }
}
