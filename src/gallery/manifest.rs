// SPDX-License-Identifier: MPL-2.0
//! Loading of the `gallery.toml` manifest that declares the page's thumbnails.
//!
//! ```toml
//! [[artwork]]
//! src = "images/comet.jpg"
//! alt = "Comet over the hills"
//! name = "Comet"
//! desc = "Ink on paper, 2023."
//! link = "https://example.com/artist"
//! ```
//!
//! Relative `src` paths are resolved against the manifest's directory.

use super::Thumbnail;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File name looked up next to the config when no manifest is given.
pub const MANIFEST_FILE: &str = "gallery.toml";

/// Parsed manifest, thumbnails in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default, rename = "artwork")]
    pub artworks: Vec<Thumbnail>,
}

impl Manifest {
    /// Parses manifest content without touching the filesystem.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;

        if let Some(position) = manifest
            .artworks
            .iter()
            .position(|artwork| artwork.src.as_os_str().is_empty())
        {
            return Err(Error::Gallery(format!(
                "artwork #{} has an empty src",
                position + 1
            )));
        }

        Ok(manifest)
    }

    /// Rewrites relative image sources so they are rooted at `base_dir`.
    #[must_use]
    pub fn resolved_against(mut self, base_dir: &Path) -> Self {
        for artwork in &mut self.artworks {
            if artwork.src.is_relative() {
                artwork.src = base_dir.join(&artwork.src);
            }
        }
        self
    }
}

/// Reads and parses the manifest at `path`, resolving relative sources.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)?;
    let manifest = Manifest::parse(&content)?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let manifest = manifest.resolved_against(base_dir);

    tracing::debug!(
        path = %path.display(),
        artworks = manifest.artworks.len(),
        "gallery manifest loaded"
    );
    Ok(manifest)
}
