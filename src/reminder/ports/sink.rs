//! Platform notification delivery port.

use crate::reminder::domain::Notification;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notification delivery.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// The platform's notification delivery surface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Posts a user-visible notification.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::PermissionDenied`] when the platform
    /// suppresses visible notifications, or [`NotificationError::Delivery`]
    /// for any other failure.
    async fn post(&self, notification: Notification) -> NotificationResult<()>;
}

/// Errors returned by notification sinks.
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// The platform denied notification permission; nothing was shown.
    #[error("notification permission denied")]
    PermissionDenied,

    /// Any other delivery failure.
    #[error("notification delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotificationError {
    /// Wraps an underlying delivery failure.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
