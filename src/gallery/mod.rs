// SPDX-License-Identifier: MPL-2.0
//! Gallery index: the ordered, immutable list of artworks shown on the page.
//!
//! The index is built once at startup from the page's thumbnail descriptors
//! and never changes afterwards. Record `i` always corresponds to thumbnail
//! `i`, so a click on the `i`-th thumbnail can open the lightbox at `i`.

pub mod manifest;

pub use manifest::{load_manifest, Manifest};

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One gallery thumbnail as declared by the page.
///
/// `name`, `description` and `link` mirror the optional `data-*` annotations
/// of an HTML thumbnail; absent or empty values fall back to defaults when
/// the index is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Thumbnail {
    pub src: PathBuf,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "desc")]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl Thumbnail {
    /// Creates a thumbnail with only an image source and alt text.
    pub fn new(src: impl Into<PathBuf>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            name: None,
            description: None,
            link: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Display metadata for one artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkRecord {
    image_source: PathBuf,
    alt_text: String,
    display_name: String,
    description: String,
    external_link: String,
}

impl ArtworkRecord {
    fn from_thumbnail(thumbnail: &Thumbnail) -> Self {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        Self {
            image_source: thumbnail.src.clone(),
            alt_text: thumbnail.alt.clone(),
            display_name: non_empty(&thumbnail.name).unwrap_or_else(|| thumbnail.alt.clone()),
            description: non_empty(&thumbnail.description).unwrap_or_default(),
            external_link: non_empty(&thumbnail.link).unwrap_or_default(),
        }
    }

    pub fn image_source(&self) -> &Path {
        &self.image_source
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Empty when the artwork has no external link.
    pub fn external_link(&self) -> &str {
        &self.external_link
    }

    pub fn has_external_link(&self) -> bool {
        !self.external_link.is_empty()
    }
}

/// Ordered artwork records, in thumbnail order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryIndex {
    records: Vec<ArtworkRecord>,
}

impl GalleryIndex {
    /// Builds the index from the page's thumbnails. Pure read of `thumbnails`.
    pub fn build(thumbnails: &[Thumbnail]) -> Self {
        Self {
            records: thumbnails.iter().map(ArtworkRecord::from_thumbnail).collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&ArtworkRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtworkRecord> {
        self.records.iter()
    }
}
