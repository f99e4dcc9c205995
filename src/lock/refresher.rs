//! Cancellable background ticker.
//!
//! A [`PeriodicRefresher`] runs its callback once per interval on its own tokio
//! task, independent of the UI loop. The first tick happens one full interval
//! after [`PeriodicRefresher::start`]; callers wanting an immediate value
//! compute it themselves before starting.
//!
//! Stopping is cooperative: [`RefreshHandle::stop`] clears the `active` flag
//! and wakes the sleeping task. A callback already running finishes, and no
//! further ticks are issued. A callback that panics ends the task; the panic
//! is logged and the refresher reports itself stopped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("refresh interval must be greater than zero, got {0:?}")]
    InvalidInterval(Duration),
}

struct Shared {
    name: String,
    active: AtomicBool,
    wake: Notify,
}

/// Cloneable stop switch for a running refresher. Callbacks receive one so
/// they can stop their own schedule.
#[derive(Clone)]
pub struct RefreshHandle {
    shared: Arc<Shared>,
}

impl RefreshHandle {
    pub fn name(&self) -> &str {
        &self.shared.name
    }

    pub fn is_active(&self) -> bool {
        self.shared.active.load(Ordering::Acquire)
    }

    /// Idempotent.
    pub fn stop(&self) {
        if self.shared.active.swap(false, Ordering::AcqRel) {
            debug!(refresher = %self.shared.name, "stopping refresher");
            // notify_one stores a permit, so a task busy in its callback still
            // sees the wake-up on its next wait.
            self.shared.wake.notify_one();
        }
    }
}

impl std::fmt::Debug for RefreshHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshHandle")
            .field("name", &self.shared.name)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Owns the background task. Dropping the refresher stops it.
#[derive(Debug)]
pub struct PeriodicRefresher {
    handle: RefreshHandle,
    task: Option<JoinHandle<()>>,
}

impl PeriodicRefresher {
    /// Start ticking immediately. `name` labels the refresher in log records.
    /// Must be called from within a tokio runtime.
    pub fn start<F>(
        name: impl Into<String>,
        interval: Duration,
        callback: F,
    ) -> Result<Self, RefreshError>
    where
        F: FnMut(&RefreshHandle) -> anyhow::Result<()> + Send + 'static,
    {
        if interval.is_zero() {
            return Err(RefreshError::InvalidInterval(interval));
        }

        let handle = RefreshHandle {
            shared: Arc::new(Shared {
                name: name.into(),
                active: AtomicBool::new(true),
                wake: Notify::new(),
            }),
        };
        debug!(refresher = %handle.name(), ?interval, "starting refresher");

        let task = tokio::spawn(run(handle.clone(), interval, callback));
        Ok(Self {
            handle,
            task: Some(task),
        })
    }

    #[cfg(test)]
    pub fn handle(&self) -> RefreshHandle {
        self.handle.clone()
    }

    pub fn stop(&self) {
        self.handle.stop();
    }

    /// Stop and wait for the background task to exit.
    pub async fn shutdown(mut self) {
        self.handle.stop();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(
                    refresher = %self.handle.name(),
                    error = %e,
                    "refresher task ended abnormally"
                );
            }
        }
    }
}

impl Drop for PeriodicRefresher {
    fn drop(&mut self) {
        self.handle.stop();
    }
}

async fn run<F>(handle: RefreshHandle, interval: Duration, mut callback: F)
where
    F: FnMut(&RefreshHandle) -> anyhow::Result<()>,
{
    let _guard = PanicGuard { handle: &handle };
    let mut tick: u64 = 0;
    while handle.is_active() {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = handle.shared.wake.notified() => {}
        }
        if !handle.is_active() {
            break;
        }

        tick += 1;
        if let Err(e) = callback(&handle) {
            warn!(refresher = %handle.name(), tick, error = %e, "refresh callback failed");
        }
    }
    debug!(refresher = %handle.name(), ticks = tick, "refresher exited");
}

/// Clears the active flag when a callback panics, so handles report the
/// refresher as stopped once its task is gone.
struct PanicGuard<'a> {
    handle: &'a RefreshHandle,
}

impl Drop for PanicGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            error!(
                refresher = %self.handle.name(),
                "refresh callback panicked, refresher stopped"
            );
            self.handle.shared.active.store(false, Ordering::Release);
        }
    }
}
