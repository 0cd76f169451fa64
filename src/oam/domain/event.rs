//! Event notifications streamed while a batch runs.

use super::{ErrorKind, OamError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier correlating the notifications of one dispatched item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(Uuid);

impl OperationId {
    /// Creates a new random operation identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an operation identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for OperationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity of an [`EventNotification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSeverity {
    /// Progress information.
    Info,
    /// Degraded but non-failing condition.
    Warning,
    /// An item failed.
    Error,
}

/// Progress or failure notification delivered to the event sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventNotification {
    operation_id: OperationId,
    component: String,
    component_name: String,
    severity: EventSeverity,
    summary: String,
    details: String,
    error_kind: Option<String>,
    emitted_at: DateTime<Utc>,
}

impl EventNotification {
    /// Builds an error notification for a failed item.
    ///
    /// `component` and `component_name` identify the adapter emitting the
    /// event, not the item that failed.
    #[must_use]
    pub fn failure(
        operation_id: OperationId,
        component: impl Into<String>,
        component_name: impl Into<String>,
        summary: impl Into<String>,
        error: &OamError,
        clock: &impl Clock,
    ) -> Self {
        Self {
            operation_id,
            component: component.into(),
            component_name: component_name.into(),
            severity: EventSeverity::Error,
            summary: summary.into(),
            details: error.to_string(),
            error_kind: Some(error.kind().as_str().to_owned()),
            emitted_at: clock.utc(),
        }
    }

    /// Returns the operation identifier.
    #[must_use]
    pub const fn operation_id(&self) -> OperationId {
        self.operation_id
    }

    /// Returns the emitting adapter's component type.
    #[must_use]
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Returns the emitting adapter's name.
    #[must_use]
    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> EventSeverity {
        self.severity
    }

    /// Returns the human summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the detail text.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns the error category code for failure notifications.
    #[must_use]
    pub fn error_kind(&self) -> Option<&str> {
        self.error_kind.as_deref()
    }

    /// Returns whether the notification carries the given error category.
    #[must_use]
    pub fn is_kind(&self, kind: ErrorKind) -> bool {
        self.error_kind() == Some(kind.as_str())
    }

    /// Returns when the notification was created.
    #[must_use]
    pub const fn emitted_at(&self) -> DateTime<Utc> {
        self.emitted_at
    }
}
