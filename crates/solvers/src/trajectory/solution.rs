use uom::si::f64::Time;

use super::Samples;

/// Indicates how the sampler terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The value hit the target the configured number of times.
    PeriodsReached,

    /// The run was cut off at the configured iteration ceiling.
    IterationCeiling,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a sampling run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the sampler terminated.
    pub status: Status,

    /// Deduplicated samples, indexed densely from zero.
    pub samples: Samples,

    /// Number of times the value exactly equalled the target.
    pub periods: usize,

    /// Number of clock reads performed.
    pub iters: usize,

    /// Elapsed time at the last clock read.
    pub elapsed: Time,
}
