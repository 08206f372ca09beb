//! Buckets sampled values onto a fixed 100-step percentage timeline.
//!
//! A [`Timeline`] maps a percentage `p` to the sample at index `p * stride`,
//! where `stride = round(len / 100)`. Lookups past the last sample return
//! `None` instead of failing, since keyframe assemblers poll every percentage
//! regardless of how many samples a run produced.
//!
//! # Sparse runs
//!
//! With fewer than 50 samples the rounded stride is zero and every percentage
//! maps to the first sample. [`StrideRule::Nearest`] keeps that behavior;
//! [`StrideRule::AtLeastOne`] (the default) clamps the stride to one so sparse
//! runs still advance through their samples.
//!
//! # Multiple tracks
//!
//! [`sample_tracks`] samples several independent springs and returns a
//! [`Composite`] whose frames list each track's value in input order.

mod composite;
mod error;
mod track;

#[cfg(test)]
mod tests;

pub use composite::{Composite, SampledTrack, sample_tracks};
pub use error::Error;
pub use track::Track;

use crate::trajectory::Samples;

/// Number of steps on the percentage timeline.
pub const STEPS: usize = 100;

/// How the stride between bucketed samples is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrideRule {
    /// `round(len / 100)`, which is zero for fewer than 50 samples.
    Nearest,

    /// `round(len / 100)` clamped to at least one.
    #[default]
    AtLeastOne,
}

impl StrideRule {
    /// Returns the stride for a run of `len` samples.
    #[must_use]
    pub fn stride(self, len: usize) -> usize {
        // Rounds half up, like rounding `len / 100` as a real number.
        let nearest = len.saturating_add(STEPS / 2) / STEPS;
        match self {
            Self::Nearest => nearest,
            Self::AtLeastOne => nearest.max(1),
        }
    }
}

/// Sampled values addressable by timeline percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    samples: Samples,
    stride: usize,
}

impl Timeline {
    #[must_use]
    pub fn new(samples: Samples, rule: StrideRule) -> Self {
        let stride = rule.stride(samples.len());
        Self { samples, stride }
    }

    /// Returns the sample spacing between consecutive percentages.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[must_use]
    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    /// Returns the value shown at `percent`, or `None` if the bucketed index
    /// lies past the last sample.
    #[must_use]
    pub fn frame(&self, percent: usize) -> Option<f64> {
        percent
            .checked_mul(self.stride)
            .and_then(|index| self.samples.get(index))
    }

    /// Returns the value at the start of the run.
    #[must_use]
    pub fn first(&self) -> f64 {
        self.samples.first()
    }

    /// Returns the last recorded value, the one the run settled on.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.samples.last()
    }

    /// Iterates over the interior percentages `1..=99` divisible by `every`,
    /// paired with their frames.
    ///
    /// An `every` of zero yields nothing.
    pub fn frames(&self, every: usize) -> impl Iterator<Item = (usize, Option<f64>)> + '_ {
        percentages(every).map(|percent| (percent, self.frame(percent)))
    }
}

/// Interior percentages `1..=99` divisible by `every`.
pub(crate) fn percentages(every: usize) -> impl Iterator<Item = usize> {
    (1..STEPS).filter(move |percent| every != 0 && percent % every == 0)
}
