use thiserror::Error;

/// Invalid physical parameters supplied to an [`Oscillator`](super::Oscillator).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("mass must be finite and positive, got {value}")]
    Mass { value: f64 },

    #[error("stiffness must be finite and positive, got {value}")]
    Stiffness { value: f64 },

    #[error("damping must be finite and non-negative, got {value}")]
    Damping { value: f64 },

    #[error("initial velocity must be finite, got {value}")]
    InitialVelocity { value: f64 },
}
