//! Per-item outcomes and the aggregate batch report.

use super::{ErrorKind, MergedError, OamError, OperationId, merge_errors, merge_messages};
use std::error::Error;
use std::fmt;

/// Outcome of one component or trait within a batch.
#[derive(Debug, Clone)]
pub struct OperationOutcome {
    operation_id: OperationId,
    index: usize,
    subject: String,
    summary: String,
    detail: String,
    message: Option<String>,
    errors: Vec<OamError>,
}

impl OperationOutcome {
    /// Creates an outcome for the item at `index` of the input.
    #[must_use]
    pub fn new(
        operation_id: OperationId,
        index: usize,
        subject: impl Into<String>,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            operation_id,
            index,
            subject: subject.into(),
            summary: summary.into(),
            detail: detail.into(),
            message: None,
            errors: Vec::new(),
        }
    }

    /// Sets the message contributed to the combined batch message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Records a failure for this item.
    #[must_use]
    pub fn with_error(mut self, error: OamError) -> Self {
        self.errors.push(error);
        self
    }

    /// Returns the operation identifier.
    #[must_use]
    pub const fn operation_id(&self) -> OperationId {
        self.operation_id
    }

    /// Returns the input position of the item.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the component name the outcome concerns.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the human summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the detail text.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Returns the message contributed to the batch, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the item's failures in the order they occurred.
    #[must_use]
    pub fn errors(&self) -> &[OamError] {
        &self.errors
    }

    /// Returns the item's failures merged into one error.
    #[must_use]
    pub fn error(&self) -> Option<MergedError<OamError>> {
        merge_errors(self.errors.iter().cloned())
    }

    /// Returns `true` when the item recorded no failure.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A failure tagged with the item it originated from.
#[derive(Debug, Clone)]
pub struct ItemFailure {
    index: usize,
    subject: String,
    error: OamError,
}

impl ItemFailure {
    /// Creates a failure for the item at `index`.
    #[must_use]
    pub fn new(index: usize, subject: impl Into<String>, error: OamError) -> Self {
        Self {
            index,
            subject: subject.into(),
            error,
        }
    }

    /// Returns the input position of the failing item.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the component name of the failing item.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the underlying error.
    #[must_use]
    pub const fn error(&self) -> &OamError {
        &self.error
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

impl fmt::Display for ItemFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl Error for ItemFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

impl MergedError<ItemFailure> {
    /// Iterates the failures of one category.
    pub fn by_kind(&self, kind: ErrorKind) -> impl Iterator<Item = &ItemFailure> {
        self.errors().iter().filter(move |failure| failure.kind() == kind)
    }

    /// Iterates the failures raised by the item at `index`.
    pub fn for_item(&self, index: usize) -> impl Iterator<Item = &ItemFailure> {
        self.errors()
            .iter()
            .filter(move |failure| failure.index() == index)
    }
}

/// Aggregate result of one batch invocation.
///
/// `message` joins the messages of the items that produced one, in input
/// order. `error` is present iff at least one item failed.
#[derive(Debug, Clone)]
pub struct BatchReport {
    outcomes: Vec<OperationOutcome>,
    message: String,
    error: Option<MergedError<ItemFailure>>,
}

impl BatchReport {
    /// Returns the combined message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the combined error, if any item failed.
    #[must_use]
    pub const fn error(&self) -> Option<&MergedError<ItemFailure>> {
        self.error.as_ref()
    }

    /// Returns one outcome per attempted item, in input order.
    #[must_use]
    pub fn outcomes(&self) -> &[OperationOutcome] {
        &self.outcomes
    }

    /// Returns `true` when no item failed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Splits the report into the combined message and error.
    #[must_use]
    pub fn into_parts(self) -> (String, Option<MergedError<ItemFailure>>) {
        (self.message, self.error)
    }
}

/// Accumulates outcomes while a batch runs.
#[derive(Debug, Default)]
pub(crate) struct BatchAccumulator {
    outcomes: Vec<OperationOutcome>,
    messages: Vec<String>,
    failures: Vec<ItemFailure>,
}

impl BatchAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, outcome: OperationOutcome) {
        if let Some(message) = outcome.message() {
            self.messages.push(message.to_owned());
        }
        for error in outcome.errors() {
            self.failures.push(ItemFailure::new(
                outcome.index(),
                outcome.subject(),
                error.clone(),
            ));
        }
        self.outcomes.push(outcome);
    }

    pub(crate) fn finish(self) -> BatchReport {
        BatchReport {
            message: merge_messages(&self.messages),
            error: merge_errors(self.failures),
            outcomes: self.outcomes,
        }
    }
}
