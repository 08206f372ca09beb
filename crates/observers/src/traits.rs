//! Capability traits for reusable observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once works with any solver whose types implement them.
//!
//! # Event traits
//!
//! - [`HasValue`] — events that carry a sampled value
//! - [`HasElapsed`] — events that carry the elapsed clock time
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use recoil_core::Observer;
//! use recoil_observers::traits::{CanStopEarly, HasValue};
//!
//! /// Stops once a value leaves the allowed band.
//! struct Band {
//!     low: f64,
//!     high: f64,
//! }
//!
//! impl<E: HasValue, A: CanStopEarly> Observer<E, A> for Band {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let value = event.value();
//!         (value < self.low || value > self.high).then(A::stop_early)
//!     }
//! }
//! ```

use recoil_solvers::trajectory;
use uom::si::f64::Time;

/// An event that carries a sampled value.
pub trait HasValue {
    /// Returns the value for this event.
    fn value(&self) -> f64;
}

/// An event that carries the elapsed clock time.
pub trait HasElapsed {
    /// Returns the elapsed time for this event.
    fn elapsed(&self) -> Time;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasValue for trajectory::Event {
    fn value(&self) -> f64 {
        self.value
    }
}

impl HasElapsed for trajectory::Event {
    fn elapsed(&self) -> Time {
        self.elapsed
    }
}

impl CanStopEarly for trajectory::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
