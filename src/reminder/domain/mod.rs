//! Domain model for due-date reminders.
//!
//! Pending reminders and the notification payloads they produce; no
//! infrastructure concerns.

mod notification;
mod reminder;

pub use notification::{Notification, REMINDER_TITLE};
pub use reminder::Reminder;
