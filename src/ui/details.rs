// SPDX-License-Identifier: MPL-2.0
//! Collapsible "About" and "Contact" sections.
//!
//! Toggling a section animates its body height with an ease-in-out curve.
//! Time comes from the caller (the render loop clock), so the state here is
//! a pure function of the instants it is given. A closing section keeps its
//! body rendered until the animation has finished.

use crate::i18n::I18n;
use crate::ui::design_tokens::{motion, radius, sizing, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, text, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};
use std::time::Duration;

/// Collapsible page sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::About, Section::Contact];

    fn title_key(self) -> &'static str {
        match self {
            Section::About => "section-about",
            Section::Contact => "section-contact",
        }
    }

    fn body_key(self) -> &'static str {
        match self {
            Section::About => "about-body",
            Section::Contact => "contact-body",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    started: Duration,
    from: f32,
}

/// Open/closed state of one section, plus its running animation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Disclosure {
    open: bool,
    transition: Option<Transition>,
}

impl Disclosure {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Flips the target state, starting the animation from wherever the
    /// previous one had reached.
    pub fn toggle(&mut self, now: Duration) {
        let from = self.progress(now);
        self.open = !self.open;
        self.transition = Some(Transition { started: now, from });
    }

    /// Fraction of the full body height shown at `now`, in `[0, 1]`.
    pub fn progress(&self, now: Duration) -> f32 {
        let target = if self.open { 1.0 } else { 0.0 };
        let Some(transition) = self.transition else {
            return target;
        };
        let t = animation_fraction(transition.started, now);
        transition.from + (target - transition.from) * ease_in_out(t)
    }

    /// Whether the body is laid out at all.
    pub fn is_visible(&self, now: Duration) -> bool {
        self.open || self.progress(now) > 0.0
    }

    /// Drops a finished animation.
    pub fn settle(&mut self, now: Duration) {
        if let Some(transition) = self.transition {
            if animation_fraction(transition.started, now) >= 1.0 {
                self.transition = None;
            }
        }
    }
}

fn animation_fraction(started: Duration, now: Duration) -> f32 {
    let elapsed = now.saturating_sub(started).as_secs_f32();
    (elapsed / motion::SECTION_TOGGLE.as_secs_f32()).clamp(0.0, 1.0)
}

/// Cubic ease-in-out over `t` in `[0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// State of every collapsible section. All start collapsed.
#[derive(Debug, Clone, Default)]
pub struct State {
    about: Disclosure,
    contact: Disclosure,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disclosure(&self, section: Section) -> &Disclosure {
        match section {
            Section::About => &self.about,
            Section::Contact => &self.contact,
        }
    }

    fn disclosure_mut(&mut self, section: Section) -> &mut Disclosure {
        match section {
            Section::About => &mut self.about,
            Section::Contact => &mut self.contact,
        }
    }

    pub fn is_animating(&self) -> bool {
        Section::ALL
            .iter()
            .any(|section| self.disclosure(*section).is_animating())
    }

    /// Advances animations to `now`.
    pub fn tick(&mut self, now: Duration) {
        self.about.settle(now);
        self.contact.settle(now);
    }
}

/// Contextual data needed to render the sections.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub now: Duration,
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle(Section),
}

/// Process a section message at time `now`.
pub fn update(state: &mut State, message: Message, now: Duration) {
    match message {
        Message::Toggle(section) => {
            state.disclosure_mut(section).toggle(now);
            tracing::debug!(?section, open = state.disclosure(section).is_open(), "section toggled");
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Section::ALL
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, section| {
            column.push(collapsible(&ctx, *section))
        })
        .width(Length::Fill)
        .into()
}

fn collapsible<'a>(ctx: &ViewContext<'a>, section: Section) -> Element<'a, Message> {
    let disclosure = ctx.state.disclosure(section);
    let indicator = Text::new(if disclosure.is_open() { "▼" } else { "▶" }).size(typography::BODY);

    let header = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(indicator)
            .push(Text::new(ctx.i18n.tr(section.title_key())).size(typography::TITLE_SM)),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .on_press(Message::Toggle(section))
    .style(|theme: &Theme, status| {
        let palette = theme.extended_palette();
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
            _ => palette.background.weak.color,
        };
        button::Style {
            background: Some(background.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let mut column = Column::new().push(header);

    if disclosure.is_visible(ctx.now) {
        let height = sizing::SECTION_MAX_HEIGHT * disclosure.progress(ctx.now);
        let body = Container::new(text(ctx.i18n.tr(section.body_key())).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .width(Length::Fill)
            .max_height(height)
            .clip(true);
        column = column.push(body);
    }

    column.into()
}
