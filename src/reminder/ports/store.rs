//! Durable pending-reminder table port.

use crate::reminder::domain::Reminder;
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for reminder store operations.
pub type ReminderStoreResult<T> = Result<T, ReminderStoreError>;

/// Durable pending-alarm table.
///
/// The table survives process termination, and at most one reminder is
/// pending per task key.
#[async_trait]
pub trait ReminderStore: Send + Sync {
    /// Inserts the reminder, replacing any pending one with the same key.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderStoreError::Storage`] when persistence fails.
    async fn put(&self, reminder: &Reminder) -> ReminderStoreResult<()>;

    /// Removes the pending reminder for the key; absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderStoreError::Storage`] when persistence fails.
    async fn remove(&self, key: TaskId) -> ReminderStoreResult<()>;

    /// Returns reminders due at or before the instant, earliest first.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderStoreError::Storage`] when persistence fails.
    async fn due_by(&self, instant: i64) -> ReminderStoreResult<Vec<Reminder>>;

    /// Returns the earliest pending fire instant, if any reminder is
    /// pending.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderStoreError::Storage`] when persistence fails.
    async fn next_fire_at(&self) -> ReminderStoreResult<Option<i64>>;
}

/// Errors returned by reminder store implementations.
#[derive(Debug, Clone, Error)]
pub enum ReminderStoreError {
    /// Unrecoverable storage-layer failure.
    #[error("storage fault: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReminderStoreError {
    /// Wraps an underlying storage failure.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
