use log::Level;
use recoil_core::Observer;
use uom::si::time::second;

use crate::traits::{HasElapsed, HasValue};

/// Logs every event through the [`log`] facade and never intervenes.
///
/// Events are logged at [`Level::Trace`] by default under the
/// `recoil_observers::event_log` target.
#[derive(Debug, Clone, Copy)]
pub struct EventLog {
    level: Level,
    events: usize,
}

impl EventLog {
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level, events: 0 }
    }

    /// Returns how many events have been logged.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(Level::Trace)
    }
}

impl<E: HasValue + HasElapsed, A> Observer<E, A> for EventLog {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events += 1;
        log::log!(
            self.level,
            "event {}: t = {:.6} s, value = {}",
            self.events,
            event.elapsed().get::<second>(),
            event.value()
        );
        None
    }
}

/// Allows `&mut EventLog` to be passed to solvers that take an observer by
/// value, so the event count can be read after the run.
impl<E: HasValue + HasElapsed, A> Observer<E, A> for &mut EventLog {
    fn observe(&mut self, event: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut **self, event)
    }
}
