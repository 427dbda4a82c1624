// SPDX-License-Identifier: MPL-2.0
//! `starfolio` is a single-page art portfolio built with the Iced GUI framework.
//!
//! It shows a gallery of artwork thumbnails with a keyboard-navigable
//! lightbox, painted over an animated star field that follows the page theme.

#![doc(html_root_url = "https://docs.rs/starfolio/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod lightbox;
pub mod render_loop;
pub mod starfield;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
