use std::time::{Duration, Instant};

use recoil_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a run once a wall-time budget is spent.
///
/// The budget is measured from the first observed event, so a deadline can
/// be built ahead of time and handed to the sampler later. This bounds how
/// long a run may take regardless of which clock drives the sampling.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    budget: Duration,
    started: Option<Instant>,
}

impl Deadline {
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            started: None,
        }
    }

    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Returns `true` once the budget has been spent.
    ///
    /// Always `false` before the first observed event.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.started
            .is_some_and(|started| started.elapsed() >= self.budget)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Deadline {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.started.get_or_insert_with(Instant::now);

        if self.is_expired() {
            log::debug!("run exceeded its {:?} budget", self.budget);
            Some(A::stop_early())
        } else {
            None
        }
    }
}
