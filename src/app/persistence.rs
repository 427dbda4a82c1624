// SPDX-License-Identifier: MPL-2.0
//! Saving the page preferences (theme mode and language) to disk.

use crate::config::{self, Config};
use crate::error::Result;
use crate::i18n::I18n;
use crate::ui::notifications::Notification;
use crate::ui::theming::ThemeMode;

/// Writes `cfg` to `settings.toml`, returning the toast for a failed save.
///
/// Skipped under test so unit tests never touch the user's config directory.
pub fn persist_preferences(cfg: &Config) -> Option<Notification> {
    if cfg!(test) {
        return None;
    }
    save_outcome(config::save(cfg))
}

fn save_outcome(result: Result<()>) -> Option<Notification> {
    match result {
        Ok(()) => None,
        Err(error) => {
            tracing::warn!(%error, "failed to save settings");
            Some(Notification::error("notification-config-save-error"))
        }
    }
}

/// Flips the theme mode and records it in `cfg`.
pub fn apply_theme_toggle(theme_mode: &mut ThemeMode, cfg: &mut Config) -> Option<Notification> {
    *theme_mode = theme_mode.toggled();
    cfg.general.theme_mode = *theme_mode;
    tracing::info!(theme_mode = ?*theme_mode, "theme changed");
    persist_preferences(cfg)
}

/// Switches to the other UI language and records it in `cfg`.
pub fn apply_language_toggle(i18n: &mut I18n, cfg: &mut Config) -> Option<Notification> {
    let locale = i18n.toggle_language().to_string();
    tracing::info!(%locale, "language changed");
    cfg.general.language = Some(locale);
    persist_preferences(cfg)
}
