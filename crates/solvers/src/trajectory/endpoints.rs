#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Error;

/// The values an animated property moves between.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Endpoints {
    pub from: f64,
    pub to: f64,
}

impl Endpoints {
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Linearly interpolates between the endpoints.
    ///
    /// A proportion of `0` yields `from` and `1` yields `to`; proportions
    /// outside `[0, 1]` extrapolate past the endpoints.
    #[must_use]
    pub fn interpolate(&self, proportion: f64) -> f64 {
        self.from + (self.to - self.from) * proportion
    }

    pub(super) fn validate(&self) -> Result<(), Error> {
        for value in [self.from, self.to] {
            if !value.is_finite() {
                return Err(Error::NonFiniteEndpoint { value });
            }
        }
        Ok(())
    }
}
