// SPDX-License-Identifier: MPL-2.0
//! Time sources for the star pulse.

use std::f64::consts::TAU;
use std::time::{Duration, Instant};

/// Pulse time units per elapsed second.
pub const TIME_SCALE: f64 = 2.0;

/// Source of elapsed time for the render loop.
///
/// Elapsed time must never go backwards or reset while the loop runs,
/// otherwise every star would jump to a new brightness at once.
pub trait FrameClock {
    fn elapsed(&self) -> Duration;

    /// Scaled pulse time, reduced to one sine period.
    ///
    /// The reduction keeps `f32` precision for long sessions and leaves
    /// `sin(time + offset)` unchanged.
    fn pulse_time(&self) -> f32 {
        ((self.elapsed().as_secs_f64() * TIME_SCALE) % TAU) as f32
    }
}

/// Wall-clock time since the loop was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for MonotonicClock {
    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock for stepping frames in tests and benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    elapsed: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, step: Duration) {
        self.elapsed += step;
    }
}

impl FrameClock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn manual_clock_accumulates() {
        let mut clock = ManualClock::new();
        clock.advance(Duration::from_millis(250));
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.elapsed(), Duration::from_millis(500));
        assert_abs_diff_eq!(clock.pulse_time(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn pulse_time_stays_within_one_period() {
        let mut clock = ManualClock::new();
        clock.advance(Duration::from_secs(86_400 * 3));
        let time = clock.pulse_time();
        assert!((0.0..std::f32::consts::TAU + 1e-3).contains(&time));
    }

    #[test]
    fn monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let first = clock.elapsed();
        let second = clock.elapsed();
        assert!(second >= first);
    }
}
