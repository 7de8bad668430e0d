//! Tracing-backed notification sink for headless use.

use crate::reminder::domain::Notification;
use crate::reminder::ports::{NotificationResult, NotificationSink};
use async_trait::async_trait;
use tracing::info;

/// Sink that surfaces notifications through the tracing subscriber.
///
/// Stands in for a platform notification service when the crate runs
/// headless; delivery never fails and permission is always granted.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl TracingNotificationSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSink for TracingNotificationSink {
    async fn post(&self, notification: Notification) -> NotificationResult<()> {
        info!(
            title = notification.title(),
            message = notification.message(),
            "notification posted"
        );
        Ok(())
    }
}
