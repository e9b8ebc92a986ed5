//! Affinity-thread rendezvous.
//!
//! The host's object model may only be touched from one thread. The
//! dispatcher owns that thread: callers suspend, their closure runs on the
//! affinity thread, and the result resumes them. Within one closure there
//! is no interleaving with other facade operations; other callers can only
//! interleave between closures.

use crate::error::{HostError, HostResult};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Handle to the affinity thread.
///
/// Cloning shares the same thread. The thread stops when the last handle
/// drops; [`UiDispatcher::invoke`] after that returns
/// [`HostError::Detached`].
#[derive(Clone)]
pub struct UiDispatcher {
    tx: mpsc::UnboundedSender<Job>,
}

impl UiDispatcher {
    /// Spawns the affinity thread and returns a handle to it.
    #[must_use]
    pub fn spawn() -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Job>();
        std::thread::Builder::new()
            .name("workbench-ui".into())
            .spawn(move || {
                debug!("affinity thread started");
                while let Some(job) = rx.blocking_recv() {
                    // A panicking job must not take the affinity thread down
                    // with it; the suspended caller observes Detached.
                    if catch_unwind(AssertUnwindSafe(job)).is_err() {
                        error!("panic in affinity-thread job");
                    }
                }
                debug!("affinity thread stopped");
            })
            .expect("failed to spawn affinity thread");
        Self { tx }
    }

    /// Runs `f` on the affinity thread, suspending the caller until it
    /// completes.
    pub async fn invoke<T, F>(&self, f: F) -> HostResult<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel();
        let job: Job = Box::new(move || {
            let _ = done_tx.send(f());
        });
        self.tx.send(job).map_err(|_| HostError::Detached)?;
        done_rx.await.map_err(|_| HostError::Detached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[tokio::test]
    async fn invoke_runs_off_the_caller_thread() {
        let ui = UiDispatcher::spawn();
        let caller = thread::current().id();
        let ran_on = ui.invoke(|| thread::current().id()).await.unwrap();
        assert_ne!(ran_on, caller);
    }

    #[tokio::test]
    async fn consecutive_invokes_share_one_thread() {
        let ui = UiDispatcher::spawn();
        let first = ui.invoke(|| thread::current().id()).await.unwrap();
        let second = ui.invoke(|| thread::current().id()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn clone_shares_the_thread() {
        let ui = UiDispatcher::spawn();
        let other = ui.clone();
        let first = ui.invoke(|| thread::current().id()).await.unwrap();
        let second = other.invoke(|| thread::current().id()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn panicking_job_does_not_kill_the_thread() {
        let ui = UiDispatcher::spawn();
        let failed = ui.invoke(|| panic!("boom")).await;
        assert!(matches!(failed, Err(HostError::Detached)));
        let ok = ui.invoke(|| 7).await.unwrap();
        assert_eq!(ok, 7);
    }
}
