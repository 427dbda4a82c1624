// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and window constants.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;

/// Initial window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;

/// Smallest window width the layout still fits in.
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Smallest window height the layout still fits in.
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Locale used when nothing else matches, and as the lookup fallback.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Locale the header language toggle switches to.
pub const ALTERNATE_LOCALE: &str = "zh-CN";
