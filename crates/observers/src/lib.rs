//! Reusable observers for Recoil trajectory sampling.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! plug into the sampler's event stream.
//!
//! # Observers
//!
//! - [`CancelToken`] — a shareable flag that stops a run once cancelled
//! - [`Deadline`] — stops a run once a wall-time budget is spent
//! - [`EventLog`] — logs every event through the `log` facade
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasValue`], [`HasElapsed`], [`CanStopEarly`])
//!
//! # Features
//!
//! - `plot` — Enables the `plot` module for visualizing trajectories and
//!   timelines via egui. This feature adds dependencies on `eframe` and
//!   `egui_plot`.
//!
//! [`Observer`]: recoil_core::Observer
//! [`HasValue`]: traits::HasValue
//! [`HasElapsed`]: traits::HasElapsed
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod cancel;
mod deadline;
mod event_log;

#[cfg(feature = "plot")]
pub mod plot;

pub use cancel::CancelToken;
pub use deadline::Deadline;
pub use event_log::EventLog;
