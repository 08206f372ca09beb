//! Core traits and types for the Recoil workspace.
//!
//! This crate defines the shared abstractions that the trajectory sampler and
//! its observers build on:
//!
//! - [`Curve`] — maps elapsed time to a normalized progress proportion
//! - [`Clock`] — the elapsed-time source read once per sample
//! - [`Observer`] — receives solver events and optionally returns control actions

mod clock;
mod curve;
mod observer;

pub use clock::{Clock, ClockError, VirtualClock, WallClock};
pub use curve::Curve;
pub use observer::Observer;
