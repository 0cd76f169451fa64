//! Error types for component dispatch and trait processing.
//!
//! Every [`OamError`] is terminal for the item it concerns and never for
//! the batch; the services collect them into a
//! [`MergedError`](super::MergedError).

use crate::oam::ports::{ClusterError, EncodeError};
use std::fmt;
use thiserror::Error;

/// Errors returned while constructing domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComponentDomainError {
    /// The component name is empty after trimming.
    #[error("component name must not be empty")]
    EmptyComponentName,

    /// The component type is empty after trimming.
    #[error("component '{0}' must declare a type")]
    EmptyComponentType(String),

    /// The trait name is empty after trimming.
    #[error("trait name must not be empty")]
    EmptyTraitName,
}

/// Per-item failure raised while handling a component or trait.
#[derive(Debug, Clone, Error)]
pub enum OamError {
    /// No API version was supplied and the component has no API version
    /// annotation.
    #[error("failed to get API version for: {component}")]
    MissingApiVersion {
        /// Component name.
        component: String,
    },

    /// No kind was supplied and the component has no kind annotation.
    #[error("failed to get kind for: {component}")]
    MissingKind {
        /// Component name.
        component: String,
    },

    /// The synthesized resource could not be encoded.
    #[error("failed to serialize resource for {component}: {source}")]
    Serialization {
        /// Component name.
        component: String,
        /// Underlying encoder failure.
        #[source]
        source: EncodeError,
    },

    /// A specialized handler requires a version the component did not declare.
    #[error("{component}: pass a valid version inside the component for mesh installation")]
    InvalidVersion {
        /// Component name.
        component: String,
    },

    /// The manifest primitive rejected the synthesized resource.
    #[error("{message}: {source}")]
    ApplyFailed {
        /// Action message describing what was attempted.
        message: String,
        /// Port failure.
        #[source]
        source: ClusterError,
    },

    /// The mesh install routine failed.
    #[error("{component}: {source}")]
    InstallFailed {
        /// Component name.
        component: String,
        /// Port failure.
        #[source]
        source: ClusterError,
    },

    /// Toggling the sidecar injection label on a namespace failed.
    #[error("failed to toggle sidecar injection on namespace \"{namespace}\": {source}")]
    NamespaceToggleFailed {
        /// Namespace whose label could not be changed.
        namespace: String,
        /// Port failure.
        #[source]
        source: ClusterError,
    },

    /// A trait property does not have the expected shape.
    #[error("trait \"{trait_name}\" has invalid property \"{property}\": {reason}")]
    InvalidTraitProperty {
        /// Trait name.
        trait_name: String,
        /// Property key.
        property: String,
        /// What was wrong with the value.
        reason: String,
    },
}

impl OamError {
    /// Returns the fieldless category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingApiVersion { .. } => ErrorKind::MissingApiVersion,
            Self::MissingKind { .. } => ErrorKind::MissingKind,
            Self::Serialization { .. } => ErrorKind::Serialization,
            Self::InvalidVersion { .. } => ErrorKind::InvalidVersion,
            Self::ApplyFailed { .. } => ErrorKind::ApplyFailed,
            Self::InstallFailed { .. } => ErrorKind::InstallFailed,
            Self::NamespaceToggleFailed { .. } => ErrorKind::NamespaceToggleFailed,
            Self::InvalidTraitProperty { .. } => ErrorKind::InvalidTraitProperty,
        }
    }
}

/// Category of an [`OamError`], suitable for matching and for event codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`OamError::MissingApiVersion`].
    MissingApiVersion,
    /// See [`OamError::MissingKind`].
    MissingKind,
    /// See [`OamError::Serialization`].
    Serialization,
    /// See [`OamError::InvalidVersion`].
    InvalidVersion,
    /// See [`OamError::ApplyFailed`].
    ApplyFailed,
    /// See [`OamError::InstallFailed`].
    InstallFailed,
    /// See [`OamError::NamespaceToggleFailed`].
    NamespaceToggleFailed,
    /// See [`OamError::InvalidTraitProperty`].
    InvalidTraitProperty,
}

impl ErrorKind {
    /// Returns the stable code for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingApiVersion => "missing_api_version",
            Self::MissingKind => "missing_kind",
            Self::Serialization => "serialization",
            Self::InvalidVersion => "invalid_version",
            Self::ApplyFailed => "apply_failed",
            Self::InstallFailed => "install_failed",
            Self::NamespaceToggleFailed => "namespace_toggle_failed",
            Self::InvalidTraitProperty => "invalid_trait_property",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
