// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! # Page Parts
//!
//! - [`header`] - Title with the theme and language toggles
//! - [`gallery_grid`] - Thumbnail grid that opens the lightbox
//! - [`lightbox_overlay`] - Enlarged artwork with caption and navigation
//! - [`details`] - Animated collapsible "About" and "Contact" sections
//! - [`notifications`] - Toasts for failures the user should see
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (star field canvas)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod details;
pub mod gallery_grid;
pub mod header;
pub mod lightbox_overlay;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
