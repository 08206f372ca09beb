use uom::si::f64::Time;

use super::{Config, Endpoints, Samples, Solution, Status};

/// Mutable state of one sampling session.
///
/// Samples are only ever appended. A value is recorded when it differs from
/// the last recorded value, and every exact hit on the target counts as a
/// period whether or not it was recorded.
pub(super) struct Run {
    endpoints: Endpoints,
    config: Config,
    values: Vec<f64>,
    last_recorded: Option<f64>,
    periods: usize,
}

impl Run {
    pub(super) fn new(endpoints: Endpoints, config: Config) -> Self {
        Self {
            endpoints,
            config,
            values: Vec::new(),
            last_recorded: None,
            periods: 0,
        }
    }

    /// Interpolates between the endpoints and applies the configured rounding.
    pub(super) fn value_at(&self, proportion: f64) -> f64 {
        self.config.round(self.endpoints.interpolate(proportion))
    }

    /// Records `value` unless it repeats the last recorded value, and counts
    /// a period if it equals the target.
    ///
    /// Returns the index `value` was recorded at.
    #[allow(clippy::float_cmp)]
    pub(super) fn record(&mut self, value: f64) -> Option<usize> {
        if value == self.endpoints.to {
            self.periods += 1;
        }

        if self.last_recorded == Some(value) {
            return None;
        }

        self.last_recorded = Some(value);
        self.values.push(value);
        Some(self.values.len() - 1)
    }

    pub(super) fn periods(&self) -> usize {
        self.periods
    }

    pub(super) fn is_finished(&self) -> bool {
        self.periods >= self.config.max_periods()
    }

    pub(super) fn into_solution(self, status: Status, iters: usize, elapsed: Time) -> Solution {
        Solution {
            status,
            samples: Samples::from_recorded(self.values),
            periods: self.periods,
            iters,
            elapsed,
        }
    }
}
