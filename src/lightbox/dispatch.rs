// SPDX-License-Identifier: MPL-2.0
//! Input dispatcher translating pointer clicks and key presses into
//! lightbox transitions.
//!
//! Clicks bubble from the clicked element up through its ancestors, the way
//! they do on a web page. Each element along the path may act on the click
//! and may stop it from travelling further. Keeping this here, rather than
//! in the widgets, lets the bindings be tested without a window.

use super::Lightbox;
use crate::error::LightboxError;

/// Element of the page that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Gallery thumbnail at the given position.
    Thumbnail(usize),
    /// The dimmed backdrop of the lightbox itself.
    Overlay,
    /// The full-size artwork.
    Image,
    /// Caption area (name and description).
    Caption,
    /// "Link to Artist" inside the caption.
    ArtistLink,
    CloseControl,
    PreviousArrow,
    NextArrow,
}

impl PointerTarget {
    /// The clicked element followed by its ancestors, innermost first.
    fn bubble_path(self) -> &'static [PointerTarget] {
        use PointerTarget::*;
        match self {
            Thumbnail(_) => &[],
            Overlay => &[Overlay],
            Image => &[Image, Overlay],
            Caption => &[Caption, Overlay],
            ArtistLink => &[ArtistLink, Caption, Overlay],
            CloseControl => &[CloseControl, Overlay],
            PreviousArrow => &[PreviousArrow, Overlay],
            NextArrow => &[NextArrow, Overlay],
        }
    }

    fn is_inside_overlay(self) -> bool {
        !matches!(self, PointerTarget::Thumbnail(_))
    }
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Whether an event kept travelling after being handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stopped,
}

/// Side effect the caller must carry out after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the given URL outside the application.
    OpenLink(String),
}

/// Result of dispatching one input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub effect: Effect,
    pub propagation: Propagation,
}

impl Outcome {
    fn unhandled() -> Self {
        Self {
            effect: Effect::None,
            propagation: Propagation::Continue,
        }
    }
}

/// Dispatches a click on `target`.
///
/// Overlay elements are not on screen while the lightbox is closed, so
/// clicks on them are ignored in that state.
pub fn click(lightbox: &mut Lightbox, target: PointerTarget) -> Result<Outcome, LightboxError> {
    if let PointerTarget::Thumbnail(index) = target {
        lightbox.open(index)?;
        return Ok(Outcome::unhandled());
    }
    if target.is_inside_overlay() && !lightbox.is_open() {
        return Ok(Outcome::unhandled());
    }

    let mut outcome = Outcome::unhandled();
    for &current in target.bubble_path() {
        match current {
            PointerTarget::ArtistLink => {
                if let Some(link) = lightbox.display().and_then(|d| d.caption.link()) {
                    outcome.effect = Effect::OpenLink(link.to_string());
                }
            }
            PointerTarget::Caption => {
                outcome.propagation = Propagation::Stopped;
                return Ok(outcome);
            }
            PointerTarget::CloseControl => lightbox.close(),
            PointerTarget::PreviousArrow => {
                lightbox.previous();
                outcome.propagation = Propagation::Stopped;
                return Ok(outcome);
            }
            PointerTarget::NextArrow => {
                lightbox.next();
                outcome.propagation = Propagation::Stopped;
                return Ok(outcome);
            }
            PointerTarget::Overlay => {
                if target == PointerTarget::Overlay {
                    lightbox.close();
                }
            }
            PointerTarget::Image | PointerTarget::Thumbnail(_) => {}
        }
    }
    Ok(outcome)
}

/// Dispatches a key press. Keys only act while the lightbox is open.
///
/// Returns `true` when the key was consumed.
pub fn key_press(lightbox: &mut Lightbox, key: Key) -> bool {
    if !lightbox.is_open() {
        return false;
    }
    match key {
        Key::ArrowLeft => {
            lightbox.previous();
        }
        Key::ArrowRight => {
            lightbox.next();
        }
        Key::Escape => lightbox.close(),
    }
    true
}
