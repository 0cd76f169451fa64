//! In-memory cluster adapter.

use crate::oam::domain::{Action, ClusterTargets};
use crate::oam::ports::{
    ClusterError, ClusterResult, ManifestApplier, MeshInstaller, SidecarInjector,
};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

/// A manifest accepted by the in-memory cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedManifest {
    /// Decoded resource document.
    pub document: Value,
    /// Whether the manifest was applied or deleted.
    pub action: Action,
    /// Target namespace.
    pub namespace: String,
    /// Number of clusters targeted.
    pub cluster_count: usize,
}

impl AppliedManifest {
    /// Returns the document's `kind`, if present.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.document.get("kind").and_then(Value::as_str)
    }

    /// Returns the document's `metadata.name`, if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.document
            .get("metadata")
            .and_then(|metadata| metadata.get("name"))
            .and_then(Value::as_str)
    }
}

/// A mesh install or uninstall run against the in-memory cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshInstall {
    /// Install or uninstall.
    pub action: Action,
    /// Requested mesh version.
    pub version: String,
    /// Control-plane namespace.
    pub namespace: String,
}

/// A sidecar injection label change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceToggle {
    /// Namespace that was relabelled.
    pub namespace: String,
    /// Label added (`Deploy`) or removed (`Remove`).
    pub action: Action,
}

/// Cluster adapter that records mutations instead of performing them.
///
/// Failures can be injected per resource kind, per namespace, and for the
/// mesh installer. Rejected operations are not recorded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCluster {
    state: Arc<RwLock<InMemoryClusterState>>,
}

#[derive(Debug, Default)]
struct InMemoryClusterState {
    applied: Vec<AppliedManifest>,
    installs: Vec<MeshInstall>,
    toggles: Vec<NamespaceToggle>,
    injected_namespaces: BTreeSet<String>,
    failing_kinds: BTreeMap<String, String>,
    failing_namespaces: BTreeMap<String, String>,
    install_failure: Option<String>,
}

impl InMemoryCluster {
    /// Creates an empty cluster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes manifests of `kind` fail with `reason`.
    ///
    /// # Errors
    ///
    /// Returns cluster runtime errors when lock acquisition fails.
    pub fn fail_kind(
        &self,
        kind: impl Into<String>,
        reason: impl Into<String>,
    ) -> ClusterResult<()> {
        self.write_state()?
            .failing_kinds
            .insert(kind.into(), reason.into());
        Ok(())
    }

    /// Makes label changes on `namespace` fail with `reason`.
    ///
    /// # Errors
    ///
    /// Returns cluster runtime errors when lock acquisition fails.
    pub fn fail_namespace(
        &self,
        namespace: impl Into<String>,
        reason: impl Into<String>,
    ) -> ClusterResult<()> {
        self.write_state()?
            .failing_namespaces
            .insert(namespace.into(), reason.into());
        Ok(())
    }

    /// Makes the mesh installer fail with `reason`.
    ///
    /// # Errors
    ///
    /// Returns cluster runtime errors when lock acquisition fails.
    pub fn fail_install(&self, reason: impl Into<String>) -> ClusterResult<()> {
        self.write_state()?.install_failure = Some(reason.into());
        Ok(())
    }

    /// Returns the manifests accepted so far.
    ///
    /// # Errors
    ///
    /// Returns cluster runtime errors when lock acquisition fails.
    pub fn applied(&self) -> ClusterResult<Vec<AppliedManifest>> {
        Ok(self.read_state()?.applied.clone())
    }

    /// Returns the mesh installs run so far.
    ///
    /// # Errors
    ///
    /// Returns cluster runtime errors when lock acquisition fails.
    pub fn installs(&self) -> ClusterResult<Vec<MeshInstall>> {
        Ok(self.read_state()?.installs.clone())
    }

    /// Returns the label changes made so far.
    ///
    /// # Errors
    ///
    /// Returns cluster runtime errors when lock acquisition fails.
    pub fn toggles(&self) -> ClusterResult<Vec<NamespaceToggle>> {
        Ok(self.read_state()?.toggles.clone())
    }

    /// Returns whether `namespace` currently carries the injection label.
    ///
    /// # Errors
    ///
    /// Returns cluster runtime errors when lock acquisition fails.
    pub fn is_injection_enabled(&self, namespace: &str) -> ClusterResult<bool> {
        Ok(self.read_state()?.injected_namespaces.contains(namespace))
    }

    fn read_state(&self) -> ClusterResult<std::sync::RwLockReadGuard<'_, InMemoryClusterState>> {
        self.state
            .read()
            .map_err(|err| ClusterError::runtime(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> ClusterResult<std::sync::RwLockWriteGuard<'_, InMemoryClusterState>> {
        self.state
            .write()
            .map_err(|err| ClusterError::runtime(std::io::Error::other(err.to_string())))
    }
}

impl ManifestApplier for InMemoryCluster {
    fn apply(
        &self,
        document: &[u8],
        action: Action,
        namespace: &str,
        targets: &ClusterTargets,
    ) -> ClusterResult<()> {
        let decoded: Value = serde_json::from_slice(document).map_err(ClusterError::runtime)?;
        let mut state = self.write_state()?;
        let kind = decoded.get("kind").and_then(Value::as_str).unwrap_or_default();
        if let Some(reason) = state.failing_kinds.get(kind) {
            return Err(ClusterError::Rejected(reason.clone()));
        }
        state.applied.push(AppliedManifest {
            document: decoded,
            action,
            namespace: namespace.to_owned(),
            cluster_count: targets.len(),
        });
        Ok(())
    }
}

impl MeshInstaller for InMemoryCluster {
    fn install(
        &self,
        action: Action,
        version: &str,
        namespace: &str,
        _targets: &ClusterTargets,
    ) -> ClusterResult<String> {
        let mut state = self.write_state()?;
        if let Some(reason) = &state.install_failure {
            return Err(ClusterError::Rejected(reason.clone()));
        }
        state.installs.push(MeshInstall {
            action,
            version: version.to_owned(),
            namespace: namespace.to_owned(),
        });
        Ok(format!(
            "mesh {version} {} in namespace \"{namespace}\"",
            action.completed_verb()
        ))
    }
}

impl SidecarInjector for InMemoryCluster {
    fn toggle_injection(
        &self,
        namespace: &str,
        action: Action,
        _targets: &ClusterTargets,
    ) -> ClusterResult<()> {
        let mut state = self.write_state()?;
        if let Some(reason) = state.failing_namespaces.get(namespace) {
            return Err(ClusterError::Rejected(reason.clone()));
        }
        match action {
            Action::Deploy => state.injected_namespaces.insert(namespace.to_owned()),
            Action::Remove => state.injected_namespaces.remove(namespace),
        };
        state.toggles.push(NamespaceToggle {
            namespace: namespace.to_owned(),
            action,
        });
        Ok(())
    }
}
