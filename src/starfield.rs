// SPDX-License-Identifier: MPL-2.0
//! Star field model behind the page: a fixed number of slowly drifting,
//! softly pulsing particles sized to the viewport.
//!
//! The field is thrown away and rebuilt whenever the viewport changes size.
//! Between rebuilds, [`StarField::advance`] moves every particle by its own
//! constant velocity, wrapping around the edges.

use rand::Rng;

/// Number of particles in a field, whatever the viewport size.
pub const PARTICLE_COUNT: usize = 150;

/// Smallest particle radius (inclusive).
pub const MIN_RADIUS: f32 = 0.5;
/// Largest particle radius (exclusive).
pub const MAX_RADIUS: f32 = 2.0;
/// Upper bound of the per-particle phase offset (exclusive).
pub const MAX_PHASE: f32 = 0.5;
/// Largest per-axis drift speed in pixels per frame.
pub const MAX_DRIFT: f32 = 0.15;

/// Multiplier turning a phase offset into radians of the pulse wave.
const PHASE_SPREAD: f32 = 10.0;

/// Drawable area of the field, in pixels. Never smaller than 1×1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Creates a viewport, clamping degenerate dimensions to one pixel.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        let clamp = |value: f32| if value.is_finite() { value.max(1.0) } else { 1.0 };
        Self {
            width: clamp(width),
            height: clamp(height),
        }
    }

    #[must_use]
    pub fn width(self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> f32 {
        self.height
    }
}

/// One star of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub phase: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Particle {
    fn random<R: Rng>(rng: &mut R, viewport: Viewport) -> Self {
        Self {
            x: rng.random_range(0.0..viewport.width),
            y: rng.random_range(0.0..viewport.height),
            radius: rng.random_range(MIN_RADIUS..MAX_RADIUS),
            phase: rng.random_range(0.0..MAX_PHASE),
            dx: rng.random_range(-MAX_DRIFT..MAX_DRIFT),
            dy: rng.random_range(-MAX_DRIFT..MAX_DRIFT),
        }
    }

    /// Pulse brightness at `time`, in `[0, 1]`.
    ///
    /// The phase offset keeps particles from pulsing in unison.
    #[must_use]
    pub fn brightness(&self, time: f32) -> f32 {
        brightness(time, self.phase)
    }

    /// Moves the particle one frame, wrapping to the opposite edge when it
    /// leaves `[0, width] × [0, height]`.
    pub fn advance(&mut self, viewport: Viewport) {
        self.x = wrap(self.x + self.dx, viewport.width);
        self.y = wrap(self.y + self.dy, viewport.height);
    }
}

/// `0.5 + 0.5·sin(time + phase·10)`, clamped to `[0, 1]`.
#[must_use]
pub fn brightness(time: f32, phase: f32) -> f32 {
    (0.5 + 0.5 * (time + phase * PHASE_SPREAD).sin()).clamp(0.0, 1.0)
}

fn wrap(value: f32, max: f32) -> f32 {
    if value < 0.0 {
        max
    } else if value > max {
        0.0
    } else {
        value
    }
}

/// The particle set together with the viewport it was generated for.
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl StarField {
    /// Generates a field for a `width × height` viewport using the thread RNG.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_rng(width, height, &mut rand::rng())
    }

    /// Generates a field using the given random source.
    pub fn with_rng<R: Rng>(width: f32, height: f32, rng: &mut R) -> Self {
        let mut field = Self {
            viewport: Viewport::new(width, height),
            particles: Vec::new(),
        };
        field.regenerate_with(width, height, rng);
        field
    }

    /// Replaces every particle with a fresh set sized to the new viewport.
    pub fn regenerate(&mut self, width: f32, height: f32) {
        self.regenerate_with(width, height, &mut rand::rng());
    }

    /// [`regenerate`](Self::regenerate) with an explicit random source.
    ///
    /// The new set is built completely before it replaces the old one.
    pub fn regenerate_with<R: Rng>(&mut self, width: f32, height: f32, rng: &mut R) {
        let viewport = Viewport::new(width, height);
        let particles: Vec<Particle> = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(rng, viewport))
            .collect();

        self.viewport = viewport;
        self.particles = particles;
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "star field regenerated"
        );
    }

    /// Moves every particle one frame.
    pub fn advance(&mut self) {
        let viewport = self.viewport;
        for particle in &mut self.particles {
            particle.advance(viewport);
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access for the render loop, which advances particles one by
    /// one as it draws them.
    pub fn particles_mut(&mut self) -> (&mut [Particle], Viewport) {
        (self.particles.as_mut_slice(), self.viewport)
    }
}
