//! Adapter implementations of the reminder ports.

pub mod log;
pub mod memory;
pub mod sqlite;

pub use log::TracingNotificationSink;
pub use memory::{InMemoryReminderStore, RecordingNotificationSink};
pub use sqlite::SqliteReminderStore;
