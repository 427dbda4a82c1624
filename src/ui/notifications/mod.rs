// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for failures the user should know about.
//!
//! Notifications carry an i18n key that is resolved when the toast is drawn,
//! so a language switch also retranslates toasts already on screen. Their
//! age is measured on the render loop clock.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::view_overlay;
