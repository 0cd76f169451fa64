//! Cluster target set.

use serde::{Deserialize, Serialize};

/// Kubeconfig payloads identifying the clusters an operation applies to.
///
/// The core never inspects the payloads; they are handed to the cluster
/// ports unchanged and in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterTargets(Vec<String>);

impl ClusterTargets {
    /// Creates a target set from kubeconfig payloads.
    #[must_use]
    pub fn new(kubeconfigs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(kubeconfigs.into_iter().map(Into::into).collect())
    }

    /// Returns the kubeconfig payloads.
    #[must_use]
    pub fn kubeconfigs(&self) -> &[String] {
        &self.0
    }

    /// Number of targeted clusters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no cluster is targeted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
