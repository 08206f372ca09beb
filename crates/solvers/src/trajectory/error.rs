use thiserror::Error;

/// Errors that can occur while sampling a trajectory.
///
/// Reaching the iteration ceiling is not an error; it is reported through
/// [`Status::IterationCeiling`](super::Status::IterationCeiling) with the
/// samples recorded so far.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("endpoint must be finite, got {value}")]
    NonFiniteEndpoint { value: f64 },

    #[error("non-finite value {value} at iteration {iter} (proportion {proportion})")]
    NonFiniteValue {
        iter: usize,
        proportion: f64,
        value: f64,
    },
}
