//! Aggregation of independent errors and messages.

use std::error::Error;
use std::fmt;

/// Ordered, non-empty collection of errors reported as one.
///
/// Displays as the newline-join of every error's message in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedError<E> {
    errors: Vec<E>,
}

impl<E> MergedError<E> {
    /// Returns the merged errors in input order.
    #[must_use]
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    /// Number of merged errors. Never zero.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; kept for API symmetry with collections.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the merged error, returning the individual errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<E> {
        self.errors
    }
}

impl<E: fmt::Display> fmt::Display for MergedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, error) in self.errors.iter().enumerate() {
            if position > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl<E: Error> Error for MergedError<E> {}

/// Merges errors into one, or returns `None` when there are none.
#[must_use]
pub fn merge_errors<E>(errors: impl IntoIterator<Item = E>) -> Option<MergedError<E>> {
    let collected: Vec<E> = errors.into_iter().collect();
    if collected.is_empty() {
        None
    } else {
        Some(MergedError { errors: collected })
    }
}

/// Newline-joins messages in input order, keeping empty entries as empty
/// lines.
#[must_use]
pub fn merge_messages<S: AsRef<str>>(messages: &[S]) -> String {
    messages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n")
}
