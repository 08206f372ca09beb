#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Error;

/// Physical parameters of a spring-mass-damper system.
///
/// The system starts displaced by one unit from its rest position and moving
/// with `initial_velocity`. Defaults are `mass = 1`, `stiffness = 100`,
/// `damping = 10`, and `initial_velocity = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Parameters {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    pub initial_velocity: f64,
}

impl Parameters {
    /// Sets the mass.
    #[must_use]
    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Sets the stiffness.
    #[must_use]
    pub fn stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Sets the damping coefficient.
    #[must_use]
    pub fn damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Sets the initial velocity.
    #[must_use]
    pub fn initial_velocity(mut self, initial_velocity: f64) -> Self {
        self.initial_velocity = initial_velocity;
        self
    }

    /// Returns the damping coefficient that makes the system critically damped.
    #[must_use]
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Checks that every parameter is usable by the closed-form solution.
    ///
    /// # Errors
    ///
    /// Returns the first offending parameter.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(Error::Mass { value: self.mass });
        }
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(Error::Stiffness {
                value: self.stiffness,
            });
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(Error::Damping {
                value: self.damping,
            });
        }
        if !self.initial_velocity.is_finite() {
            return Err(Error::InitialVelocity {
                value: self.initial_velocity,
            });
        }
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 100.0,
            damping: 10.0,
            initial_velocity: 0.0,
        }
    }
}
