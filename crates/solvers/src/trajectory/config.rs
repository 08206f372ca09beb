use thiserror::Error;

/// Largest supported number of rounding digits.
///
/// Beyond this, `10^digits` exceeds the precision of an `f64` mantissa and
/// rounding stops being meaningful.
pub const MAX_ROUNDING_DIGITS: u32 = 15;

/// Default ceiling on clock reads per run.
pub const DEFAULT_MAX_ITERS: usize = 10_000;

/// Configuration for the trajectory sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_periods: usize,
    rounding_digits: u32,
    max_iters: usize,
}

/// Errors that can occur when validating a sampler config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_periods must be at least 1")]
    MaxPeriods,

    #[error("rounding_digits must be at most 15, got {digits}")]
    RoundingDigits { digits: u32 },

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_periods: 2,
            rounding_digits: 3,
            max_iters: DEFAULT_MAX_ITERS,
        }
    }
}

impl Config {
    /// Creates a new validated config.
    ///
    /// A `rounding_digits` of zero disables rounding.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_periods` or `max_iters` is zero, or if
    /// `rounding_digits` exceeds [`MAX_ROUNDING_DIGITS`].
    pub fn new(
        max_periods: usize,
        rounding_digits: u32,
        max_iters: usize,
    ) -> Result<Self, ConfigError> {
        if max_periods == 0 {
            return Err(ConfigError::MaxPeriods);
        }
        if rounding_digits > MAX_ROUNDING_DIGITS {
            return Err(ConfigError::RoundingDigits {
                digits: rounding_digits,
            });
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            max_periods,
            rounding_digits,
            max_iters,
        })
    }

    /// Returns how many exact hits on the target end a run.
    #[must_use]
    pub fn max_periods(&self) -> usize {
        self.max_periods
    }

    /// Returns the number of decimal digits values are rounded to.
    #[must_use]
    pub fn rounding_digits(&self) -> u32 {
        self.rounding_digits
    }

    /// Returns the maximum number of clock reads before a run is cut off.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Rounds `value` to the configured number of decimal digits.
    ///
    /// Ties round half away from zero, following [`f64::round`].
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        if self.rounding_digits == 0 {
            return value;
        }

        // Bounded by MAX_ROUNDING_DIGITS, so the cast cannot wrap.
        #[allow(clippy::cast_possible_wrap)]
        let scale = 10_f64.powi(self.rounding_digits as i32);
        (value * scale).round() / scale
    }
}
