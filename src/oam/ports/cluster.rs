//! Cluster mutation ports.
//!
//! Calls block until the cluster primitive returns a definitive result;
//! timeouts and retries belong to the adapters.

use crate::oam::domain::{Action, ClusterTargets};
use std::sync::Arc;
use thiserror::Error;

/// Result type for cluster port operations.
pub type ClusterResult<T> = Result<T, ClusterError>;

/// Applies or deletes an encoded resource document.
#[cfg_attr(test, mockall::automock)]
pub trait ManifestApplier: Send + Sync {
    /// Applies (`Deploy`) or deletes (`Remove`) `document` in `namespace` on
    /// every target cluster.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError`] when any target rejects the operation.
    fn apply(
        &self,
        document: &[u8],
        action: Action,
        namespace: &str,
        targets: &ClusterTargets,
    ) -> ClusterResult<()>;
}

/// Installs or uninstalls the mesh control plane.
#[cfg_attr(test, mockall::automock)]
pub trait MeshInstaller: Send + Sync {
    /// Runs the install routine and returns its status message.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError`] when the install routine fails.
    fn install(
        &self,
        action: Action,
        version: &str,
        namespace: &str,
        targets: &ClusterTargets,
    ) -> ClusterResult<String>;
}

/// Toggles automatic sidecar injection on a namespace.
#[cfg_attr(test, mockall::automock)]
pub trait SidecarInjector: Send + Sync {
    /// Adds (`Deploy`) or removes (`Remove`) the injection label.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError`] when the namespace cannot be relabelled.
    fn toggle_injection(
        &self,
        namespace: &str,
        action: Action,
        targets: &ClusterTargets,
    ) -> ClusterResult<()>;
}

/// Errors returned by cluster adapters.
#[derive(Debug, Clone, Error)]
pub enum ClusterError {
    /// The cluster refused the request.
    #[error("{0}")]
    Rejected(String),

    /// No target cluster could be reached.
    #[error("cluster unreachable: {0}")]
    Unreachable(String),

    /// Generic runtime failure.
    #[error("cluster runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl ClusterError {
    /// Wraps a runtime error from the adapter.
    #[must_use]
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
