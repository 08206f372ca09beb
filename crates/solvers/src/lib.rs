//! Closed-form spring trajectories sampled onto a percentage timeline.
//!
//! # Modules
//!
//! - [`spring`] — the analytic damped harmonic oscillator
//! - [`trajectory`] — samples a [`Curve`] into a deduplicated, rounded sequence
//! - [`timeline`] — buckets samples onto a 100-step percentage timeline,
//!   for one track or several tracks sharing the timeline
//!
//! [`Curve`]: recoil_core::Curve

pub mod spring;
pub mod timeline;
pub mod trajectory;
