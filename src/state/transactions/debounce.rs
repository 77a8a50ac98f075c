//! Cancellable delayed task.
//!
//! Each [`Debouncer::schedule`] aborts the previously scheduled task before
//! spawning a new one, so only the last task scheduled runs, and only if it
//! is left alone for the whole delay.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Holds at most one pending delayed task.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates an idle debouncer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending task and schedules `action` to run after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Cancels the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Returns `true` while a scheduled task has not run yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
