//! Deploy/remove intent for a batch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a batch installs or removes its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create or update the described resources.
    Deploy,
    /// Delete the described resources.
    Remove,
}

impl Action {
    /// Maps the upstream deletion flag onto an action.
    #[must_use]
    pub const fn from_delete_flag(is_delete: bool) -> Self {
        if is_delete { Self::Remove } else { Self::Deploy }
    }

    /// Returns `true` for [`Action::Remove`].
    #[must_use]
    pub const fn is_delete(self) -> bool {
        matches!(self, Self::Remove)
    }

    /// Verb used while the action is in flight ("deploying", "removing").
    #[must_use]
    pub const fn in_progress_verb(self) -> &'static str {
        match self {
            Self::Deploy => "deploying",
            Self::Remove => "removing",
        }
    }

    /// Verb used once the action finished ("deployed", "removed").
    #[must_use]
    pub const fn completed_verb(self) -> &'static str {
        match self {
            Self::Deploy => "deployed",
            Self::Remove => "removed",
        }
    }
}

impl From<bool> for Action {
    fn from(is_delete: bool) -> Self {
        Self::from_delete_flag(is_delete)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deploy => write!(f, "deploy"),
            Self::Remove => write!(f, "remove"),
        }
    }
}
