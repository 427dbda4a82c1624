// SPDX-License-Identifier: MPL-2.0
//! Full-window canvas that replays the star field's latest frame.

use crate::render_loop::DrawList;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Element, Length, Rectangle, Renderer, Theme};

/// Canvas program painting the dots recorded by the render loop.
pub struct StarCanvas<'a> {
    stars: &'a DrawList,
}

impl<'a> StarCanvas<'a> {
    #[must_use]
    pub fn new(stars: &'a DrawList) -> Self {
        Self { stars }
    }

    /// Creates a Canvas widget filling its parent.
    pub fn into_element<Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for StarCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        for dot in self.stars.dots() {
            frame.fill(&Path::circle(dot.center, dot.radius), dot.color);
        }
        vec![frame.into_geometry()]
    }
}
