use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use recoil_core::Observer;

use crate::traits::CanStopEarly;

/// A shareable flag that stops a run once cancelled.
///
/// Clones share the same flag, so one clone can be handed to the sampler as
/// its observer while another is cancelled from elsewhere, for example from a
/// different thread or from inside another observer.
///
/// # Example
///
/// ```rust
/// use recoil_observers::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
///
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that any run observed by this token stop at its next event.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for CancelToken {
    fn observe(&mut self, _event: &E) -> Option<A> {
        if self.is_cancelled() {
            log::debug!("run cancelled");
            Some(A::stop_early())
        } else {
            None
        }
    }
}
