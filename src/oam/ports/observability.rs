//! Event and error reporting ports.

use crate::oam::domain::{EventNotification, OamError};

/// Best-effort delivery of progress and failure notifications.
///
/// Delivery failures stay inside the adapter and never reach batch results.
#[cfg_attr(test, mockall::automock)]
pub trait EventSink: Send + Sync {
    /// Publishes one notification.
    fn publish(&self, notification: &EventNotification);
}

/// Records errors that must be visible to operators.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorLogger: Send + Sync {
    /// Logs an error without changing control flow.
    fn log_error(&self, error: &OamError);
}
