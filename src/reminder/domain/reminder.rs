//! Pending reminder records.

use crate::task::domain::TaskId;
use serde::{Deserialize, Serialize};

/// A pending one-shot reminder for a task's due date.
///
/// Reminders are keyed by task id: scheduling again for the same task
/// replaces the pending record, so two tasks sharing a title cannot collide
/// and an edited due date never leaves a duplicate alarm behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    key: TaskId,
    title: String,
    fire_at: i64,
}

impl Reminder {
    /// Creates a pending reminder firing at `fire_at`, in epoch
    /// milliseconds.
    #[must_use]
    pub fn new(key: TaskId, title: impl Into<String>, fire_at: i64) -> Self {
        Self {
            key,
            title: title.into(),
            fire_at,
        }
    }

    /// Returns the owning task's id.
    #[must_use]
    pub const fn key(&self) -> TaskId {
        self.key
    }

    /// Returns the task title delivered as the notification body.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the fire instant in epoch milliseconds.
    #[must_use]
    pub const fn fire_at(&self) -> i64 {
        self.fire_at
    }
}
