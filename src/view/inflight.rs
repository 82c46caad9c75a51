//! Outstanding request tracking
//!
//! Each screen keeps at most one request alive. Starting a new one aborts the
//! previous; dropping the screen aborts whatever is left.

use futures_util::future::{AbortHandle, AbortRegistration, Abortable};
use std::future::Future;

/// Abort handle for a screen's current request
#[derive(Debug, Default)]
pub struct InFlight {
    current: Option<AbortHandle>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the previous request and register a new one
    pub fn replace(&mut self) -> AbortRegistration {
        self.cancel();
        let (handle, registration) = AbortHandle::new_pair();
        self.current = Some(handle);
        registration
    }

    /// Wrap `future` so it stops when superseded or cancelled
    pub fn track<F: Future>(&mut self, future: F) -> Abortable<F> {
        Abortable::new(future, self.replace())
    }

    /// Abort the current request, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            if !handle.is_aborted() {
                tracing::debug!("Aborting superseded request");
            }
            handle.abort();
        }
    }

    /// Whether a request is registered and not yet cancelled or replaced.
    /// Completion of the tracked future is not observed.
    pub fn has_handle(&self) -> bool {
        self.current
            .as_ref()
            .map(|handle| !handle.is_aborted())
            .unwrap_or(false)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.cancel();
    }
}
