use std::time::Instant;

use thiserror::Error;
use uom::si::{f64::Time, time::second};

/// A source of elapsed time for a sampling session.
///
/// A sampler calls [`start`](Clock::start) once when a session begins and
/// then [`elapsed`](Clock::elapsed) once per sample. Each call to `elapsed`
/// counts as one clock read, so virtual clocks may advance on every read.
pub trait Clock {
    /// Marks the start of a new session.
    fn start(&mut self);

    /// Returns the time elapsed since the last call to [`start`](Clock::start).
    fn elapsed(&mut self) -> Time;
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn start(&mut self) {
        (**self).start();
    }

    fn elapsed(&mut self) -> Time {
        (**self).elapsed()
    }
}

/// Errors that can occur when building a [`VirtualClock`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ClockError {
    #[error("clock step must be finite and positive, got {seconds} s")]
    InvalidStep { seconds: f64 },
}

/// A deterministic clock that advances by a fixed step on every read.
///
/// After [`start`](Clock::start), successive reads return `0`, `step`,
/// `2 * step`, and so on. Two sessions with the same step therefore see
/// exactly the same sequence of times, independent of execution speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualClock {
    step: Time,
    ticks: u32,
}

impl VirtualClock {
    /// Creates a virtual clock with the given step.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is not finite and strictly positive.
    pub fn new(step: Time) -> Result<Self, ClockError> {
        let seconds = step.get::<second>();
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(ClockError::InvalidStep { seconds });
        }

        Ok(Self { step, ticks: 0 })
    }

    /// Creates a virtual clock with a step given in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is not finite and strictly positive.
    pub fn from_secs(step: f64) -> Result<Self, ClockError> {
        Self::new(Time::new::<second>(step))
    }

    /// Returns the fixed step between reads.
    #[must_use]
    pub fn step(&self) -> Time {
        self.step
    }

    /// Returns how many reads have happened since the last start.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

impl Default for VirtualClock {
    /// A clock stepping one millisecond per read.
    fn default() -> Self {
        Self {
            step: Time::new::<second>(1e-3),
            ticks: 0,
        }
    }
}

impl Clock for VirtualClock {
    fn start(&mut self) {
        self.ticks = 0;
    }

    fn elapsed(&mut self) -> Time {
        let elapsed = self.step * f64::from(self.ticks);
        self.ticks = self.ticks.saturating_add(1);
        elapsed
    }
}

/// A clock backed by the system's monotonic wall clock.
///
/// Sampling density with this clock depends on how fast the sampler runs, so
/// two sessions with identical inputs may record different numbers of samples.
/// Prefer [`VirtualClock`] whenever reproducible output matters.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    started: Instant,
}

impl WallClock {
    /// Creates a wall clock started at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn start(&mut self) {
        self.started = Instant::now();
    }

    fn elapsed(&mut self) -> Time {
        Time::new::<second>(self.started.elapsed().as_secs_f64())
    }
}
