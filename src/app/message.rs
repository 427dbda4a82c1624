// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::lightbox::dispatch::{Key, PointerTarget};
use crate::ui::{details, header, notifications};
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A press on one of the lightbox-related regions.
    Pointer(PointerTarget),
    /// A key the lightbox listens for, pressed anywhere in the window.
    Key(Key),
    /// The window was opened or resized to this logical size.
    Resized(Size),
    /// The display is ready for the next frame.
    Frame(Instant),
    Header(header::Message),
    Details(details::Message),
    Notification(notifications::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-CN`, `en-US`).
    pub lang: Option<String>,
    /// Optional gallery manifest to load instead of the configured one.
    pub manifest: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `STARFOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
