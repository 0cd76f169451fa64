//! `tracing`-backed observability adapters.

use crate::oam::domain::{EventNotification, EventSeverity, OamError};
use crate::oam::ports::{ErrorLogger, EventSink};

/// Logs errors as `tracing` error events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorLogger;

impl ErrorLogger for TracingErrorLogger {
    fn log_error(&self, error: &OamError) {
        tracing::error!(error_kind = %error.kind(), "{error}");
    }
}

/// Emits notifications as `tracing` events at a level matching their
/// severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn publish(&self, notification: &EventNotification) {
        let operation_id = notification.operation_id();
        let error_kind = notification.error_kind().unwrap_or_default();
        match notification.severity() {
            EventSeverity::Info => tracing::info!(
                %operation_id,
                component = notification.component(),
                component_name = notification.component_name(),
                details = notification.details(),
                "{}",
                notification.summary()
            ),
            EventSeverity::Warning => tracing::warn!(
                %operation_id,
                component = notification.component(),
                component_name = notification.component_name(),
                details = notification.details(),
                "{}",
                notification.summary()
            ),
            EventSeverity::Error => tracing::error!(
                %operation_id,
                component = notification.component(),
                component_name = notification.component_name(),
                error_kind,
                details = notification.details(),
                "{}",
                notification.summary()
            ),
        }
    }
}
