//! Periodic refresh of a tracked job.
//!
//! [`LiveTracking::spawn`] starts a background loop that reloads the tracked
//! job on every tick and publishes it on a `watch` channel. The loop runs
//! until the handle is stopped or dropped, or every receiver has gone away.

use std::sync::Arc;
use std::time::Duration;

use mockable::Clock;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::{JobTrackingService, TrackedJob};
use crate::marketplace::{
    domain::{Job, Task, TaskId, User},
    ports::EntityRepository,
};
use crate::tracking::ports::TrackingSimulator;

/// Shortest refresh period accepted by [`LiveTracking::spawn`].
pub const MIN_REFRESH_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a running live tracking loop.
///
/// Dropping the handle cancels the loop.
#[derive(Debug)]
pub struct LiveTracking {
    updates: watch::Receiver<Option<Arc<TrackedJob>>>,
    cancel: CancellationToken,
    worker: Option<JoinHandle<()>>,
}

impl LiveTracking {
    /// Starts refreshing `task_id` every `period`.
    ///
    /// The first refresh happens immediately. Periods shorter than
    /// [`MIN_REFRESH_PERIOD`] are raised to it. Failed refreshes are logged
    /// and the previous value is kept.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn spawn<T, J, U, S, C>(
        service: JobTrackingService<T, J, U, S, C>,
        task_id: TaskId,
        period: Duration,
    ) -> Self
    where
        T: EntityRepository<Task> + 'static,
        J: EntityRepository<Job> + 'static,
        U: EntityRepository<User> + 'static,
        S: TrackingSimulator + 'static,
        C: Clock + Send + Sync + 'static,
    {
        let (sender, updates) = watch::channel(None);
        let cancel = CancellationToken::new();
        let worker = tokio::spawn(refresh_loop(
            service,
            task_id,
            period.max(MIN_REFRESH_PERIOD),
            sender,
            cancel.clone(),
        ));
        Self {
            updates,
            cancel,
            worker: Some(worker),
        }
    }

    /// Returns the most recently published state, if any refresh has
    /// succeeded.
    #[must_use]
    pub fn latest(&self) -> Option<Arc<TrackedJob>> {
        self.updates.borrow().clone()
    }

    /// Returns a receiver notified on every published refresh.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<TrackedJob>>> {
        self.updates.clone()
    }

    /// Returns `true` while the refresh loop is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| !worker.is_finished())
    }

    /// Cancels the loop and waits for it to exit.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(worker) = self.worker.take()
            && let Err(err) = worker.await
        {
            warn!(error = %err, "live tracking loop ended abnormally");
        }
    }
}

impl Drop for LiveTracking {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn refresh_loop<T, J, U, S, C>(
    service: JobTrackingService<T, J, U, S, C>,
    task_id: TaskId,
    period: Duration,
    sender: watch::Sender<Option<Arc<TrackedJob>>>,
    cancel: CancellationToken,
) where
    T: EntityRepository<Task>,
    J: EntityRepository<Job>,
    U: EntityRepository<User>,
    S: TrackingSimulator,
    C: Clock + Send + Sync,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            () = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }
        let refreshed = tokio::select! {
            () = cancel.cancelled() => break,
            result = service.load(&task_id) => result,
        };
        match refreshed {
            Ok(tracked) => {
                if sender.send(Some(Arc::new(tracked))).is_err() {
                    break;
                }
            }
            Err(err) => warn!(%task_id, error = %err, "live tracking refresh failed"),
        }
    }
    debug!(%task_id, "live tracking stopped");
}
