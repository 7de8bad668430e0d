//! Notification payloads handed to the platform delivery surface.

use super::Reminder;
use serde::{Deserialize, Serialize};

/// Fixed headline for due-date reminder notifications.
pub const REMINDER_TITLE: &str = "Task Reminder";

/// A user-visible notification payload: headline plus body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    title: String,
    message: String,
}

impl Notification {
    /// Creates a notification payload.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Builds the payload for a due reminder: fixed headline, task title as
    /// the body.
    #[must_use]
    pub fn for_reminder(reminder: &Reminder) -> Self {
        Self::new(REMINDER_TITLE, reminder.title())
    }

    /// Returns the headline.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
