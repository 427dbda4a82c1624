// SPDX-License-Identifier: MPL-2.0
//! Queueing, timing and dismissal of notifications.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Duration;

/// Maximum number of toasts on screen at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` at `now`, or queues it when the screen is full.
    pub fn push(&mut self, mut notification: Notification, now: Duration) {
        tracing::debug!(
            key = notification.message_key(),
            severity = ?notification.severity(),
            "notification raised"
        );
        if self.visible.len() < MAX_VISIBLE {
            notification.mark_shown(now);
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Removes a notification. Returns `true` if it was found.
    pub fn dismiss(&mut self, id: NotificationId, now: Duration) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(now);
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops expired toasts and lets queued ones take their place.
    pub fn tick(&mut self, now: Duration) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    pub fn update(&mut self, message: Message, now: Duration) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id, now);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether a visible toast is waiting to time out, so frames are needed.
    #[must_use]
    pub fn has_pending_timeouts(&self) -> bool {
        self.visible
            .iter()
            .any(|n| n.severity().auto_dismiss_after().is_some())
    }

    fn promote_from_queue(&mut self, now: Duration) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.mark_shown(now);
            self.visible.push_back(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: u64) -> Duration {
        Duration::from_secs(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_pending_timeouts());
    }

    #[test]
    fn overflow_is_queued_and_promoted_on_dismiss() {
        let mut manager = Manager::new();
        let first = Notification::error("e1");
        let first_id = first.id();
        manager.push(first, secs(0));
        manager.push(Notification::error("e2"), secs(0));
        manager.push(Notification::error("e3"), secs(0));
        manager.push(Notification::error("e4"), secs(0));
        assert_eq!(manager.visible_count(), 3);
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.dismiss(first_id, secs(1)));
        assert_eq!(manager.visible_count(), 3);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.visible().any(|n| n.message_key() == "e4"));
    }

    #[test]
    fn tick_expires_warnings_only() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("w"), secs(10));
        manager.push(Notification::error("e"), secs(10));
        assert!(manager.has_pending_timeouts());

        manager.tick(secs(12));
        assert_eq!(manager.visible_count(), 2);

        manager.tick(secs(15));
        let keys: Vec<&str> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["e"]);
        assert!(!manager.has_pending_timeouts());
    }

    #[test]
    fn promoted_toast_times_from_promotion() {
        let mut manager = Manager::new();
        for _ in 0..3 {
            manager.push(Notification::warning("w"), secs(0));
        }
        manager.push(Notification::warning("late"), secs(0));

        manager.tick(secs(5));
        assert_eq!(manager.visible_count(), 1);

        manager.tick(secs(9));
        assert_eq!(manager.visible_count(), 1);
        manager.tick(secs(10));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn dismiss_message_removes_toast() {
        let mut manager = Manager::new();
        let notification = Notification::error("e");
        let id = notification.id();
        manager.push(notification, secs(0));

        manager.update(Message::Dismiss(id), secs(1));
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.dismiss(id, secs(1)));
    }
}
