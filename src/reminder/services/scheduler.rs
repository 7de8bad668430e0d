//! Reminder scheduling keyed by task id.

use crate::reminder::domain::Reminder;
use crate::reminder::ports::{NotificationSink, ReminderStore, ReminderStoreError};
use crate::task::domain::TaskId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::debug;

use super::runner::ReminderRunner;

/// Errors surfaced while scheduling or cancelling reminders.
#[derive(Debug, Error)]
pub enum ReminderScheduleError {
    /// The pending-reminder table failed.
    #[error(transparent)]
    Store(#[from] ReminderStoreError),
}

/// Result type for scheduling operations.
pub type ReminderScheduleResult<T> = Result<T, ReminderScheduleError>;

/// Outcome of a schedule request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// A reminder is pending for the requested instant.
    Scheduled,
    /// The instant was not strictly in the future; nothing was registered.
    PastDue,
}

/// Registers one-shot reminders against the durable pending table.
///
/// At most one reminder is pending per task: scheduling again replaces the
/// previous instant and [`ReminderScheduler::cancel`] clears it. Runners
/// created by [`ReminderScheduler::runner`] are woken on every change.
pub struct ReminderScheduler<S, C> {
    store: Arc<S>,
    clock: Arc<C>,
    wake: watch::Sender<u64>,
}

impl<S, C> Clone for ReminderScheduler<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            wake: self.wake.clone(),
        }
    }
}

impl<S, C> ReminderScheduler<S, C>
where
    S: ReminderStore,
    C: Clock + Send + Sync,
{
    /// Creates a scheduler over the pending-reminder store.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        let (wake, _) = watch::channel(0);
        Self { store, clock, wake }
    }

    /// Schedules a reminder for the task at `fire_at`, in epoch
    /// milliseconds.
    ///
    /// Instants not strictly in the future register nothing and report
    /// [`ScheduleOutcome::PastDue`]. A pending reminder for the same task is
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderScheduleError::Store`] when persistence fails.
    pub async fn schedule(
        &self,
        key: TaskId,
        title: &str,
        fire_at: i64,
    ) -> ReminderScheduleResult<ScheduleOutcome> {
        let now = self.clock.utc().timestamp_millis();
        if fire_at <= now {
            debug!(%key, fire_at, now, "reminder instant already passed, nothing scheduled");
            return Ok(ScheduleOutcome::PastDue);
        }
        self.store.put(&Reminder::new(key, title, fire_at)).await?;
        debug!(%key, fire_at, "reminder scheduled");
        self.notify_runners();
        Ok(ScheduleOutcome::Scheduled)
    }

    /// Cancels the pending reminder for the task, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderScheduleError::Store`] when persistence fails.
    pub async fn cancel(&self, key: TaskId) -> ReminderScheduleResult<()> {
        self.store.remove(key).await?;
        debug!(%key, "pending reminder cleared");
        self.notify_runners();
        Ok(())
    }

    /// Creates a delivery runner sharing this scheduler's store and wakeups.
    #[must_use]
    pub fn runner<N>(&self, sink: Arc<N>) -> ReminderRunner<S, N, C>
    where
        N: NotificationSink,
    {
        ReminderRunner::new(
            Arc::clone(&self.store),
            sink,
            Arc::clone(&self.clock),
            self.wake.subscribe(),
        )
    }

    fn notify_runners(&self) {
        self.wake
            .send_modify(|generation| *generation = generation.wrapping_add(1));
    }
}
