//! In-memory reminder adapters for tests.

use crate::reminder::domain::{Notification, Reminder};
use crate::reminder::ports::{
    NotificationError, NotificationResult, NotificationSink, ReminderStore, ReminderStoreError,
    ReminderStoreResult,
};
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

/// Thread-safe in-memory pending-reminder table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReminderStore {
    state: Arc<RwLock<HashMap<TaskId, Reminder>>>,
}

impl InMemoryReminderStore {
    /// Creates an empty reminder store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ReminderStoreError {
    ReminderStoreError::storage(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ReminderStore for InMemoryReminderStore {
    async fn put(&self, reminder: &Reminder) -> ReminderStoreResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.insert(reminder.key(), reminder.clone());
        Ok(())
    }

    async fn remove(&self, key: TaskId) -> ReminderStoreResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.remove(&key);
        Ok(())
    }

    async fn due_by(&self, instant: i64) -> ReminderStoreResult<Vec<Reminder>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut due: Vec<Reminder> = state
            .values()
            .filter(|reminder| reminder.fire_at() <= instant)
            .cloned()
            .collect();
        drop(state);
        due.sort_unstable_by_key(|reminder| (reminder.fire_at(), reminder.key()));
        Ok(due)
    }

    async fn next_fire_at(&self) -> ReminderStoreResult<Option<i64>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.values().map(Reminder::fire_at).min())
    }
}

/// Notification sink that records every posted payload.
///
/// Clones share the recorded history. A denying sink simulates the platform
/// refusing visible notifications.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationSink {
    posted: Arc<Mutex<Vec<Notification>>>,
    deny: bool,
}

impl RecordingNotificationSink {
    /// Creates a sink that accepts every post.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that refuses every post with a permission denial.
    #[must_use]
    pub fn denying() -> Self {
        Self {
            posted: Arc::default(),
            deny: true,
        }
    }

    /// Returns the payloads posted so far.
    #[must_use]
    pub fn posted(&self) -> Vec<Notification> {
        self.posted
            .lock()
            .map(|posted| posted.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl NotificationSink for RecordingNotificationSink {
    async fn post(&self, notification: Notification) -> NotificationResult<()> {
        if self.deny {
            return Err(NotificationError::PermissionDenied);
        }
        if let Ok(mut posted) = self.posted.lock() {
            posted.push(notification);
        }
        Ok(())
    }
}
