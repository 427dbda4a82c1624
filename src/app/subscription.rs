// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and window events are turned into page-level messages here, and
//! display frames are requested only while something needs repainting.

use super::Message;
use crate::lightbox::dispatch::Key;
use iced::keyboard::{self, key::Named};
use iced::{event, window, Event, Subscription};

/// Routes arrow keys, `Escape` and window size changes.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| map_event(&event))
}

fn map_event(event: &Event) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => map_key(*named).map(Message::Key),
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::Resized(*size))
        }
        _ => None,
    }
}

fn map_key(named: Named) -> Option<Key> {
    match named {
        Named::ArrowLeft => Some(Key::ArrowLeft),
        Named::ArrowRight => Some(Key::ArrowRight),
        Named::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Display-synchronized frames while the star field renders or a section
/// animates.
pub fn create_frame_subscription(needs_frames: bool) -> Subscription<Message> {
    if needs_frames {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
