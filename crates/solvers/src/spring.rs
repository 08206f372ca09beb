//! Closed-form damped harmonic oscillator.
//!
//! # Model
//!
//! A mass `m` on a spring of stiffness `k` with viscous damping `c` obeys
//!
//! ```text
//! m x'' + c x' + k x = 0
//! ```
//!
//! Starting one unit away from rest, the [`Oscillator`] evaluates the exact
//! displacement and reports progress toward rest as a proportion:
//!
//! ```text
//! w0   = sqrt(k / m)
//! zeta = c / (2 sqrt(k m))
//!
//! under-damped (zeta < 1):
//!     wd  = w0 sqrt(1 - zeta²)
//!     raw = exp(-zeta w0 t) (cos(wd t) + B sin(wd t)),  B = (zeta w0 - v0) / wd
//!
//! otherwise:
//!     raw = (1 + B t) exp(-w0 t),                        B = w0 - v0
//!
//! proportion = 1 - raw
//! ```
//!
//! # Limitations
//!
//! Over-damped parameters (`zeta > 1`) use the critically damped formula.
//! The resulting curve still starts at `0` and settles at `1`, but it does not
//! follow the true over-damped decay.

mod error;
mod parameters;

pub use error::Error;
pub use parameters::Parameters;

use recoil_core::Curve;
use uom::si::{f64::Time, time::second};

/// Which closed-form branch an [`Oscillator`] evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// `zeta < 1`: oscillates around the target while settling.
    UnderDamped,

    /// `zeta >= 1`: approaches the target without oscillating.
    ///
    /// Over-damped inputs are evaluated with this branch as well.
    CriticallyDamped,
}

/// A validated spring whose progress can be evaluated at any time.
///
/// All coefficients are derived once at construction, so evaluation is a
/// pure function of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    parameters: Parameters,
    natural_frequency: f64,
    damping_ratio: f64,
    damped_frequency: f64,
    a: f64,
    b: f64,
    regime: Regime,
}

impl Oscillator {
    /// Derives the closed-form coefficients for the given parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if mass or stiffness is not strictly positive, if
    /// damping is negative, or if any parameter is not finite.
    pub fn new(parameters: Parameters) -> Result<Self, Error> {
        parameters.validate()?;

        let Parameters {
            mass,
            stiffness,
            damping,
            initial_velocity,
        } = parameters;

        let w0 = (stiffness / mass).sqrt();
        let zeta = damping / (2.0 * (stiffness * mass).sqrt());

        let (regime, wd, b) = if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            (Regime::UnderDamped, wd, (zeta * w0 - initial_velocity) / wd)
        } else {
            if zeta > 1.0 {
                log::warn!(
                    "damping ratio {zeta} is over-damped; evaluating with the critically damped curve"
                );
            }
            (Regime::CriticallyDamped, 0.0, w0 - initial_velocity)
        };

        Ok(Self {
            parameters,
            natural_frequency: w0,
            damping_ratio: zeta,
            damped_frequency: wd,
            a: 1.0,
            b,
            regime,
        })
    }

    /// Returns the parameters this oscillator was built from.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        self.parameters
    }

    /// Returns the undamped angular frequency `w0 = sqrt(k / m)`.
    #[must_use]
    pub fn natural_frequency(&self) -> f64 {
        self.natural_frequency
    }

    /// Returns the damping ratio `zeta = c / (2 sqrt(k m))`.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio
    }

    /// Returns the damped angular frequency, or `0` outside the under-damped regime.
    #[must_use]
    pub fn damped_frequency(&self) -> f64 {
        self.damped_frequency
    }

    #[must_use]
    pub fn regime(&self) -> Regime {
        self.regime
    }

    /// Returns `true` when the damping ratio exceeds one.
    #[must_use]
    pub fn is_over_damped(&self) -> bool {
        self.damping_ratio > 1.0
    }

    /// Returns the progress proportion `seconds` after release.
    #[must_use]
    pub fn proportion_at(&self, seconds: f64) -> f64 {
        let t = seconds;
        let raw = match self.regime {
            Regime::UnderDamped => {
                let envelope = (-t * self.damping_ratio * self.natural_frequency).exp();
                let wd_t = self.damped_frequency * t;
                envelope * (self.a * wd_t.cos() + self.b * wd_t.sin())
            }
            Regime::CriticallyDamped => (self.a + self.b * t) * (-t * self.natural_frequency).exp(),
        };

        1.0 - raw
    }
}

impl Curve for Oscillator {
    fn proportion(&self, elapsed: Time) -> f64 {
        self.proportion_at(elapsed.get::<second>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn times() -> impl Iterator<Item = f64> {
        (0..=2000).map(|i| f64::from(i) * 1e-3)
    }

    #[test]
    fn default_parameters_are_under_damped() {
        let spring = Oscillator::new(Parameters::default()).unwrap();

        assert_eq!(spring.regime(), Regime::UnderDamped);
        assert_relative_eq!(spring.natural_frequency(), 10.0);
        assert_relative_eq!(spring.damping_ratio(), 0.5);
        assert_relative_eq!(spring.damped_frequency(), 10.0 * 0.75_f64.sqrt());
    }

    #[test]
    fn under_damped_starts_at_zero_and_settles_at_one() {
        let params = Parameters::default()
            .stiffness(381.47)
            .damping(15.17)
            .initial_velocity(3.0);
        let spring = Oscillator::new(params).unwrap();

        assert_eq!(spring.proportion_at(0.0), 0.0);
        assert_relative_eq!(spring.proportion_at(10.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn under_damped_overshoots_the_target() {
        let spring = Oscillator::new(Parameters::default().damping(2.0)).unwrap();

        let peak = times().map(|t| spring.proportion_at(t)).fold(f64::MIN, f64::max);

        assert!(peak > 1.0, "expected overshoot, peak was {peak}");
    }

    #[test]
    fn critical_damping_rises_monotonically_without_overshoot() {
        for (mass, stiffness) in [(1.0, 100.0), (2.5, 40.0), (0.3, 900.0)] {
            let params = Parameters::default().mass(mass).stiffness(stiffness);
            let params = params.damping(params.critical_damping());
            let spring = Oscillator::new(params).unwrap();

            assert_eq!(spring.regime(), Regime::CriticallyDamped);
            assert_eq!(spring.proportion_at(0.0), 0.0);

            let mut previous = 0.0;
            for t in times() {
                let value = spring.proportion_at(t);
                assert!(value >= previous, "decreased at t = {t}");
                assert!(value <= 1.0, "overshot at t = {t}");
                previous = value;
            }
        }
    }

    #[test]
    fn evaluation_is_pure() {
        let spring = Oscillator::new(Parameters::default()).unwrap();

        for t in [0.0, 0.017, 0.25, 1.5] {
            assert_eq!(
                spring.proportion_at(t).to_bits(),
                spring.proportion_at(t).to_bits()
            );
        }
    }

    #[test]
    fn curve_matches_seconds_evaluation() {
        let spring = Oscillator::new(Parameters::default()).unwrap();
        let elapsed = Time::new::<second>(0.125);

        assert_eq!(spring.proportion(elapsed), spring.proportion_at(0.125));
    }

    #[test]
    fn over_damped_uses_critical_branch() {
        let params = Parameters::default().damping(50.0);
        let spring = Oscillator::new(params).unwrap();

        assert!(spring.is_over_damped());
        assert_eq!(spring.regime(), Regime::CriticallyDamped);
        assert_eq!(spring.damped_frequency(), 0.0);

        // Same curve as a critically damped spring with the same w0 and v0.
        let critical = Oscillator::new(params.damping(params.critical_damping())).unwrap();
        for t in [0.0, 0.1, 0.4] {
            assert_relative_eq!(spring.proportion_at(t), critical.proportion_at(t));
        }
    }

    #[test]
    fn initial_velocity_shifts_early_progress() {
        let resting = Oscillator::new(Parameters::default()).unwrap();
        let pushed = Oscillator::new(Parameters::default().initial_velocity(20.0)).unwrap();

        assert!(pushed.proportion_at(0.02) > resting.proportion_at(0.02));
    }

    #[test]
    fn rejects_invalid_parameters() {
        let base = Parameters::default();

        assert_eq!(
            Oscillator::new(base.mass(0.0)),
            Err(Error::Mass { value: 0.0 })
        );
        assert_eq!(
            Oscillator::new(base.stiffness(-1.0)),
            Err(Error::Stiffness { value: -1.0 })
        );
        assert_eq!(
            Oscillator::new(base.damping(-0.5)),
            Err(Error::Damping { value: -0.5 })
        );
        assert!(matches!(
            Oscillator::new(base.initial_velocity(f64::NAN)),
            Err(Error::InitialVelocity { .. })
        ));
        assert!(matches!(
            Oscillator::new(base.mass(f64::INFINITY)),
            Err(Error::Mass { .. })
        ));
    }
}
