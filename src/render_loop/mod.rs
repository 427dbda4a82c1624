// SPDX-License-Identifier: MPL-2.0
//! Render loop that paints the star field once per display frame.
//!
//! Each frame clears the surface, reads the pulse time and the theme signal,
//! then for every particle paints a circle at its pulse brightness and moves
//! it one step. The loop runs until a surface error stops it for good. It is
//! never restarted.
//!
//! Frame pacing belongs to the host. Inside the GUI, a frame subscription
//! calls [`RenderLoop::render_frame`] while [`RenderLoop::is_running`] holds.
//! Headless callers drive [`RenderLoop::run`] with a [`FrameScheduler`].

pub mod clock;
pub mod surface;

pub use clock::{FrameClock, ManualClock, MonotonicClock, TIME_SCALE};
pub use surface::{Dot, DrawList, Surface};

use crate::error::RenderError;
use crate::starfield::StarField;
use crate::ui::theming::{star_color, ThemeSignal};
use iced::Point;

/// Decides when the next frame happens.
pub trait FrameScheduler {
    /// Waits for the next frame. Returns `false` once the host stops
    /// providing frames.
    fn next_frame(&mut self) -> bool;
}

/// Scheduler that grants a fixed number of frames immediately.
#[derive(Debug, Clone, Copy)]
pub struct FixedFrames {
    remaining: u64,
}

impl FixedFrames {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameScheduler for FixedFrames {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
enum LoopState {
    Running,
    Stopped(RenderError),
}

/// Per-frame painter for a [`StarField`].
#[derive(Debug, Clone)]
pub struct RenderLoop<C: FrameClock = MonotonicClock> {
    clock: C,
    state: LoopState,
    frames: u64,
}

impl RenderLoop<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for RenderLoop<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: FrameClock> RenderLoop<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: LoopState::Running,
            frames: 0,
        }
    }

    /// The "continue rendering" condition.
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// The error that stopped the loop, if any.
    pub fn error(&self) -> Option<&RenderError> {
        match &self.state {
            LoopState::Running => None,
            LoopState::Stopped(err) => Some(err),
        }
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Paints one frame of `field` onto `surface`, advancing every particle.
    ///
    /// A surface error stops the loop permanently. Once stopped, every
    /// later call returns that error without touching the field.
    pub fn render_frame<S, T>(
        &mut self,
        field: &mut StarField,
        theme: &T,
        surface: &mut S,
    ) -> Result<(), RenderError>
    where
        S: Surface,
        T: ThemeSignal + ?Sized,
    {
        if let LoopState::Stopped(err) = &self.state {
            return Err(err.clone());
        }

        match paint(field, self.clock.pulse_time(), theme.is_light(), surface) {
            Ok(()) => {
                self.frames += 1;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, frames = self.frames, "render loop stopped");
                self.state = LoopState::Stopped(err.clone());
                Err(err)
            }
        }
    }

    /// Renders frames for as long as `scheduler` provides them and the loop
    /// keeps running. Returns the number of frames rendered by this call.
    pub fn run<F, S, T>(
        &mut self,
        scheduler: &mut F,
        field: &mut StarField,
        theme: &T,
        surface: &mut S,
    ) -> Result<u64, RenderError>
    where
        F: FrameScheduler,
        S: Surface,
        T: ThemeSignal + ?Sized,
    {
        let start = self.frames;
        while self.is_running() && scheduler.next_frame() {
            self.render_frame(field, theme, surface)?;
        }
        Ok(self.frames - start)
    }
}

fn paint<S: Surface>(
    field: &mut StarField,
    time: f32,
    is_light: bool,
    surface: &mut S,
) -> Result<(), RenderError> {
    surface.clear()?;

    let (particles, viewport) = field.particles_mut();
    for particle in particles {
        let alpha = particle.brightness(time);
        surface.fill_circle(
            Point::new(particle.x, particle.y),
            particle.radius,
            star_color(is_light, alpha),
        )?;
        particle.advance(viewport);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::starfield::PARTICLE_COUNT;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::theming::Appearance;
    use iced::Color;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn field() -> StarField {
        StarField::with_rng(400.0, 300.0, &mut StdRng::seed_from_u64(1))
    }

    /// Surface that fails after accepting a number of circles.
    struct FailingSurface {
        budget: usize,
    }

    impl Surface for FailingSurface {
        fn clear(&mut self) -> Result<(), RenderError> {
            Ok(())
        }

        fn fill_circle(&mut self, _: Point, _: f32, _: Color) -> Result<(), RenderError> {
            if self.budget == 0 {
                return Err(RenderError::SurfaceUnavailable);
            }
            self.budget -= 1;
            Ok(())
        }
    }

    #[test]
    fn frame_draws_every_particle_then_advances_it() {
        let mut field = field();
        let before = field.particles().to_vec();
        let mut render_loop = RenderLoop::with_clock(ManualClock::new());
        let mut list = DrawList::new();

        render_loop
            .render_frame(&mut field, &Appearance::Dark, &mut list)
            .unwrap();

        assert_eq!(list.len(), PARTICLE_COUNT);
        for (dot, particle) in list.dots().iter().zip(&before) {
            assert_eq!(dot.center, Point::new(particle.x, particle.y));
            assert_eq!(dot.radius, particle.radius);
        }
        let mut expected = before.clone();
        for particle in &mut expected {
            particle.advance(field.viewport());
        }
        assert_eq!(field.particles(), expected.as_slice());
        assert_eq!(render_loop.frames_rendered(), 1);
    }

    #[test]
    fn frame_clears_previous_frame() {
        let mut field = field();
        let mut render_loop = RenderLoop::with_clock(ManualClock::new());
        let mut list = DrawList::new();

        for _ in 0..3 {
            render_loop
                .render_frame(&mut field, &Appearance::Dark, &mut list)
                .unwrap();
        }
        assert_eq!(list.len(), PARTICLE_COUNT);
    }

    #[test]
    fn theme_selects_color_family() {
        let mut field = field();
        let mut render_loop = RenderLoop::with_clock(ManualClock::new());
        let mut list = DrawList::new();

        render_loop
            .render_frame(&mut field, &Appearance::Light, &mut list)
            .unwrap();
        assert!(list
            .dots()
            .iter()
            .all(|dot| (dot.color.r, dot.color.g, dot.color.b) == (0.0, 0.0, 0.0)));

        render_loop
            .render_frame(&mut field, &Appearance::Dark, &mut list)
            .unwrap();
        assert!(list
            .dots()
            .iter()
            .all(|dot| (dot.color.r, dot.color.g, dot.color.b) == (1.0, 1.0, 1.0)));
    }

    #[test]
    fn alpha_follows_pulse_formula_and_clock() {
        let mut field = field();
        let mut render_loop = RenderLoop::with_clock(ManualClock::new());
        let mut list = DrawList::new();
        render_loop.clock_mut().advance(Duration::from_millis(1_500));
        let time = render_loop.clock().pulse_time();
        let phases: Vec<f32> = field.particles().iter().map(|p| p.phase).collect();

        render_loop
            .render_frame(&mut field, &Appearance::Dark, &mut list)
            .unwrap();

        for (dot, phase) in list.dots().iter().zip(phases) {
            let expected = 0.5 + 0.5 * (time + phase * 10.0).sin();
            assert_abs_diff_eq!(dot.color.a, expected, epsilon = 1e-5);
        }
    }

    #[test]
    fn run_renders_scheduled_frames() {
        let mut field = field();
        let mut render_loop = RenderLoop::with_clock(ManualClock::new());
        let mut list = DrawList::new();

        let rendered = render_loop
            .run(&mut FixedFrames::new(5), &mut field, &Appearance::Dark, &mut list)
            .unwrap();

        assert_eq!(rendered, 5);
        assert!(render_loop.is_running());
    }

    #[test]
    fn surface_failure_stops_loop_for_good() {
        let mut field = field();
        let mut render_loop = RenderLoop::with_clock(ManualClock::new());
        let mut surface = FailingSurface { budget: 10 };

        let err = render_loop
            .run(&mut FixedFrames::new(3), &mut field, &Appearance::Dark, &mut surface)
            .unwrap_err();

        assert_eq!(err, RenderError::SurfaceUnavailable);
        assert!(!render_loop.is_running());
        assert_eq!(render_loop.error(), Some(&RenderError::SurfaceUnavailable));
        assert_eq!(render_loop.frames_rendered(), 0);

        let snapshot = field.clone();
        let mut list = DrawList::new();
        let again = render_loop.render_frame(&mut field, &Appearance::Dark, &mut list);
        assert_eq!(again, Err(RenderError::SurfaceUnavailable));
        assert!(list.is_empty());
        assert_eq!(field, snapshot);
    }
}
