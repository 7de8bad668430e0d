//! Delivery loop firing due reminders through the notification sink.

use crate::reminder::domain::{Notification, Reminder};
use crate::reminder::ports::{
    NotificationError, NotificationSink, ReminderStore, ReminderStoreError,
};
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, error, warn};

/// Errors that stop the delivery loop.
#[derive(Debug, Error)]
pub enum ReminderRunError {
    /// The pending-reminder table failed; the fault is not retried and
    /// propagates to the caller.
    #[error(transparent)]
    Store(#[from] ReminderStoreError),
}

/// Result type for the delivery loop.
pub type ReminderRunResult<T> = Result<T, ReminderRunError>;

/// Fires due reminders and removes them from the pending table.
///
/// Reminders that came due while the process was down fire immediately on
/// the next run. Delivery never retries: a permission denial drops the
/// visible notification by design, and any other sink failure is logged.
pub struct ReminderRunner<S, N, C> {
    store: Arc<S>,
    sink: Arc<N>,
    clock: Arc<C>,
    wake: watch::Receiver<u64>,
    scheduler_connected: bool,
}

impl<S, N, C> ReminderRunner<S, N, C>
where
    S: ReminderStore,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    pub(crate) const fn new(
        store: Arc<S>,
        sink: Arc<N>,
        clock: Arc<C>,
        wake: watch::Receiver<u64>,
    ) -> Self {
        Self {
            store,
            sink,
            clock,
            wake,
            scheduler_connected: true,
        }
    }

    /// Runs the delivery loop.
    ///
    /// The loop ends once every scheduler handle is gone and no reminder
    /// remains pending.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderRunError::Store`] when the pending table fails.
    pub async fn run(mut self) -> ReminderRunResult<()> {
        loop {
            self.deliver_due().await?;
            let next_fire_at = self.store.next_fire_at().await?;
            if !self.wait_for_work(next_fire_at).await {
                return Ok(());
            }
        }
    }

    /// Fires every reminder due at the current instant, earliest first, and
    /// returns how many fired.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderRunError::Store`] when the pending table fails.
    pub async fn deliver_due(&self) -> ReminderRunResult<usize> {
        let now = self.clock.utc().timestamp_millis();
        let due = self.store.due_by(now).await?;
        let fired = due.len();
        for reminder in due {
            self.post(&reminder).await;
            self.store.remove(reminder.key()).await?;
        }
        Ok(fired)
    }

    async fn post(&self, reminder: &Reminder) {
        match self.sink.post(Notification::for_reminder(reminder)).await {
            Ok(()) => debug!(key = %reminder.key(), "reminder fired"),
            Err(NotificationError::PermissionDenied) => {
                // The alarm still fires; only the visible notification is
                // lost.
                warn!(key = %reminder.key(), "notification permission denied, reminder shown to no one");
            }
            Err(err) => error!(key = %reminder.key(), %err, "reminder delivery failed"),
        }
    }

    /// Waits until the next deadline or a scheduler wakeup. Returns `false`
    /// when every scheduler handle is gone and the table is empty.
    async fn wait_for_work(&mut self, next_fire_at: Option<i64>) -> bool {
        if self.scheduler_connected {
            let Some(fire_at) = next_fire_at else {
                // Nothing pending: only a scheduler wakeup can create work.
                if self.wake.changed().await.is_err() {
                    self.scheduler_connected = false;
                    return false;
                }
                return true;
            };
            tokio::select! {
                () = tokio::time::sleep(self.until(fire_at)) => {}
                changed = self.wake.changed() => {
                    if changed.is_err() {
                        self.scheduler_connected = false;
                    }
                }
            }
            return true;
        }
        // Schedulers are gone: drain what remains on the timer alone.
        match next_fire_at {
            Some(fire_at) => {
                tokio::time::sleep(self.until(fire_at)).await;
                true
            }
            None => false,
        }
    }

    fn until(&self, fire_at: i64) -> Duration {
        let now = self.clock.utc().timestamp_millis();
        Duration::from_millis(u64::try_from(fire_at.saturating_sub(now)).unwrap_or(0))
    }
}
