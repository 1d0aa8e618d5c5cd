//! Single-slot cancellable delayed task.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::CoreError;

/// Runs at most one deferred task at a time.
///
/// [`schedule`](Self::schedule) aborts any task that has not fired yet and
/// replaces it. Dropping the `DelayedTask` cancels the pending task.
#[derive(Debug)]
pub struct DelayedTask {
    runtime: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl DelayedTask {
    /// Create a delayed task slot that spawns onto `runtime`.
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: Mutex::new(None),
        }
    }

    /// Create a delayed task slot bound to the current tokio runtime.
    pub fn current() -> Result<Self, CoreError> {
        Ok(Self::new(Handle::try_current()?))
    }

    /// Run `task` after `delay`, cancelling any task still waiting.
    pub fn schedule<F>(&self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(previous) = pending.take() {
            if !previous.is_finished() {
                trace!("Replacing pending delayed task");
            }
            previous.abort();
        }

        *pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Cancel the pending task. Returns true if one was still waiting.
    pub fn cancel(&self) -> bool {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);

        match pending.take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                if was_pending {
                    trace!("Cancelled pending delayed task");
                }
                was_pending
            }
            None => false,
        }
    }

    /// Whether a scheduled task has not completed yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        let pending = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}
