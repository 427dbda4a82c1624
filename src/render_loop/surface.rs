// SPDX-License-Identifier: MPL-2.0
//! Drawing surfaces the render loop paints onto.

use crate::error::RenderError;
use iced::{Color, Point};

/// Anything that can be cleared and can have filled circles painted on it.
pub trait Surface {
    fn clear(&mut self) -> Result<(), RenderError>;

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) -> Result<(), RenderError>;
}

/// A filled circle recorded by [`DrawList`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
}

/// Retained list of circles for one frame.
///
/// The update step records into it; the canvas widget replays it when the
/// window is redrawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    dots: Vec<Dot>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}

impl Surface for DrawList {
    fn clear(&mut self) -> Result<(), RenderError> {
        self.dots.clear();
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) -> Result<(), RenderError> {
        if !(center.x.is_finite() && center.y.is_finite() && radius.is_finite()) || radius < 0.0 {
            return Err(RenderError::InvalidGeometry {
                x: center.x,
                y: center.y,
                radius,
            });
        }
        self.dots.push(Dot {
            center,
            radius,
            color,
        });
        Ok(())
    }
}
