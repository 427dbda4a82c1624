// SPDX-License-Identifier: MPL-2.0
//! Core notification data.

use crate::ui::design_tokens::{motion, palette};
use iced::Color;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity decides the accent color and whether the toast times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something failed but the page keeps working.
    Warning,
    /// Something is broken for the rest of the session.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Warning => palette::AMBER_500,
            Severity::Error => palette::ROSE_500,
        }
    }

    /// `None` means the toast stays until dismissed.
    #[must_use]
    pub fn auto_dismiss_after(self) -> Option<Duration> {
        match self {
            Severity::Warning => Some(motion::WARNING_TOAST),
            Severity::Error => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    /// Render clock time at which the toast was first shown.
    shown_at: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            shown_at: None,
        }
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    pub(super) fn mark_shown(&mut self, now: Duration) {
        self.shown_at.get_or_insert(now);
    }

    /// Whether a timed toast has been on screen long enough at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Duration) -> bool {
        match (self.shown_at, self.severity.auto_dismiss_after()) {
            (Some(shown_at), Some(limit)) => now.saturating_sub(shown_at) >= limit,
            _ => false,
        }
    }
}
