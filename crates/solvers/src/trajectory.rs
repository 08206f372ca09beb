//! Samples a progress curve into a rounded, deduplicated value sequence.
//!
//! # Algorithm
//!
//! Each iteration reads the clock once and then:
//!
//! 1. Evaluates the curve at the elapsed time to get a proportion.
//! 2. Interpolates `from + (to - from) * proportion`.
//! 3. Rounds to the configured number of decimal digits (zero disables rounding).
//! 4. Records the value at the next index unless it equals the last recorded
//!    value.
//! 5. Counts a period whenever the value equals `to` exactly.
//!
//! Sampling stops once the period count reaches
//! [`Config::max_periods`], or after [`Config::max_iters`] clock reads. The
//! ceiling is a designed cutoff: it returns the samples gathered so far with
//! [`Status::IterationCeiling`] rather than failing.
//!
//! # Clocks
//!
//! The number of samples depends on the clock. A [`VirtualClock`] advances by
//! a fixed step on every read and makes runs reproducible. A [`WallClock`]
//! reads real time, so sample density follows execution speed.
//!
//! # Observer Events
//!
//! The sampler emits one [`Event`] per clock read, after the value has been
//! recorded and the period counted. Observers can return
//! [`Action::StopEarly`] to end the run with the samples recorded so far,
//! which is how cancellation tokens and wall-time deadlines plug in.
//!
//! [`VirtualClock`]: recoil_core::VirtualClock
//! [`WallClock`]: recoil_core::WallClock

mod action;
mod config;
mod endpoints;
mod error;
mod event;
mod run;
mod samples;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS, MAX_ROUNDING_DIGITS};
pub use endpoints::Endpoints;
pub use error::Error;
pub use event::Event;
pub use samples::Samples;
pub use solution::{Solution, Status};

use recoil_core::{Clock, Curve, Observer};
use uom::si::{f64::Time, time::second};

use run::Run;

/// Samples `curve` between `endpoints` until enough periods are reached.
///
/// The clock is started before the first read. See the [module docs](self)
/// for the per-iteration algorithm and observer timing.
///
/// # Errors
///
/// Returns an error if either endpoint is not finite, or if the curve yields
/// a proportion that interpolates to a non-finite value.
pub fn sample<C, K, Obs>(
    curve: &C,
    endpoints: Endpoints,
    config: &Config,
    clock: &mut K,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    C: Curve + ?Sized,
    K: Clock + ?Sized,
    Obs: Observer<Event, Action>,
{
    endpoints.validate()?;

    let mut run = Run::new(endpoints, *config);
    let mut elapsed = Time::new::<second>(0.0);

    clock.start();

    for iter in 0..config.max_iters() {
        elapsed = clock.elapsed();
        let proportion = curve.proportion(elapsed);
        let value = run.value_at(proportion);

        if !value.is_finite() {
            return Err(Error::NonFiniteValue {
                iter,
                proportion,
                value,
            });
        }

        let recorded = run.record(value);

        log::trace!(
            "iter {iter}: t = {:.6} s, proportion = {proportion}, value = {value}, recorded = {recorded:?}",
            elapsed.get::<second>()
        );

        let event = Event {
            iter,
            elapsed,
            proportion,
            value,
            recorded,
            periods: run.periods(),
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::debug!("sampling stopped by observer after {} iterations", iter + 1);
            return Ok(run.into_solution(Status::StoppedByObserver, iter + 1, elapsed));
        }

        if run.is_finished() {
            log::debug!(
                "sampling reached {} periods after {} iterations",
                run.periods(),
                iter + 1
            );
            return Ok(run.into_solution(Status::PeriodsReached, iter + 1, elapsed));
        }
    }

    log::debug!(
        "sampling cut off at the {}-iteration ceiling with {} of {} periods",
        config.max_iters(),
        run.periods(),
        config.max_periods()
    );
    Ok(run.into_solution(Status::IterationCeiling, config.max_iters(), elapsed))
}

/// Samples a curve without observation.
///
/// This is a convenience wrapper around [`sample`] that discards events.
///
/// # Errors
///
/// Returns an error if either endpoint is not finite, or if the curve yields
/// a proportion that interpolates to a non-finite value.
pub fn sample_unobserved<C, K>(
    curve: &C,
    endpoints: Endpoints,
    config: &Config,
    clock: &mut K,
) -> Result<Solution, Error>
where
    C: Curve + ?Sized,
    K: Clock + ?Sized,
{
    sample(curve, endpoints, config, clock, ())
}
