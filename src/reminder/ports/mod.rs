//! Port contracts for reminder scheduling and delivery.

pub mod sink;
pub mod store;

pub use sink::{NotificationError, NotificationResult, NotificationSink};
pub use store::{ReminderStore, ReminderStoreError, ReminderStoreResult};

#[cfg(test)]
pub use sink::MockNotificationSink;
