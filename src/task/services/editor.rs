//! Save flow: persist task changes, confirm, and arm due-date reminders.

use super::store::TaskStore;
use crate::reminder::domain::Notification;
use crate::reminder::ports::{NotificationError, NotificationSink, ReminderStore};
use crate::reminder::services::{ReminderScheduleError, ReminderScheduler, ScheduleOutcome};
use crate::task::domain::{Task, TaskDraft, TaskId};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced by the save flow.
#[derive(Debug, Error)]
pub enum TaskEditorError {
    /// Task persistence failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// Reminder bookkeeping failed.
    #[error(transparent)]
    Reminder(#[from] ReminderScheduleError),
}

/// Result type for save-flow operations.
pub type TaskEditorResult<T> = Result<T, TaskEditorError>;

/// Orchestrates the save path: store write, confirmation notice, reminder.
///
/// Confirmation delivery failures never fail a save; a permission denial is
/// silently dropped and anything else is logged.
pub struct TaskEditor<R, S, N, C>
where
    R: TaskRepository,
    S: ReminderStore,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    store: TaskStore<R>,
    scheduler: ReminderScheduler<S, C>,
    sink: Arc<N>,
}

impl<R, S, N, C> TaskEditor<R, S, N, C>
where
    R: TaskRepository,
    S: ReminderStore,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    /// Creates a save-flow service.
    #[must_use]
    pub const fn new(
        store: TaskStore<R>,
        scheduler: ReminderScheduler<S, C>,
        sink: Arc<N>,
    ) -> Self {
        Self {
            store,
            scheduler,
            sink,
        }
    }

    /// Persists a new task, posts the added confirmation, and arms a
    /// reminder when the draft carries a future due date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError`] when the store write or reminder
    /// bookkeeping fails.
    pub async fn create(&self, draft: TaskDraft) -> TaskEditorResult<Task> {
        let task = self.store.insert(&draft).await?;
        self.confirm(Notification::new(
            "New Task Added",
            format!("You added: \"{}\"", task.title()),
        ))
        .await;
        self.arm_reminder(&task).await?;
        Ok(task)
    }

    /// Persists an edited task, posts the updated confirmation, and re-arms
    /// or cancels its reminder to match the new due date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError`] when the store write or reminder
    /// bookkeeping fails.
    pub async fn save(&self, task: &Task) -> TaskEditorResult<()> {
        self.store.update(task).await?;
        self.confirm(Notification::new(
            "Task Updated",
            format!("You updated: \"{}\"", task.title()),
        ))
        .await;
        self.arm_reminder(task).await?;
        Ok(())
    }

    /// Removes a task and cancels any reminder still pending for it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError`] when the store write or reminder
    /// bookkeeping fails.
    pub async fn delete(&self, id: TaskId) -> TaskEditorResult<()> {
        self.store.delete(id).await?;
        self.scheduler.cancel(id).await?;
        Ok(())
    }

    async fn confirm(&self, notification: Notification) {
        match self.sink.post(notification).await {
            Ok(()) => {}
            Err(NotificationError::PermissionDenied) => {
                warn!("notification permission denied, confirmation dropped");
            }
            Err(err) => error!(%err, "confirmation delivery failed"),
        }
    }

    async fn arm_reminder(&self, task: &Task) -> Result<(), ReminderScheduleError> {
        let Some(fire_at) = task.due_date() else {
            return self.scheduler.cancel(task.id()).await;
        };
        match self
            .scheduler
            .schedule(task.id(), task.title(), fire_at)
            .await?
        {
            ScheduleOutcome::Scheduled => Ok(()),
            // A due date edited into the past leaves no alarm worth keeping.
            ScheduleOutcome::PastDue => self.scheduler.cancel(task.id()).await,
        }
    }
}
