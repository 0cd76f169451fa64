//! Collaborators shared by every handler in a batch.

use crate::config::AdapterConfig;
use crate::oam::ports::{
    ErrorLogger, ManifestApplier, ManifestEncoder, MeshInstaller, SidecarInjector,
};
use std::sync::Arc;

/// Configuration and ports handed to component handlers.
#[derive(Clone)]
pub struct HandlerContext {
    config: Arc<AdapterConfig>,
    manifests: Arc<dyn ManifestApplier>,
    mesh: Arc<dyn MeshInstaller>,
    sidecar: Arc<dyn SidecarInjector>,
    encoder: Arc<dyn ManifestEncoder>,
    error_logger: Arc<dyn ErrorLogger>,
}

impl HandlerContext {
    /// Creates a context from individual ports.
    #[must_use]
    pub fn new(
        config: Arc<AdapterConfig>,
        manifests: Arc<dyn ManifestApplier>,
        mesh: Arc<dyn MeshInstaller>,
        sidecar: Arc<dyn SidecarInjector>,
        encoder: Arc<dyn ManifestEncoder>,
        error_logger: Arc<dyn ErrorLogger>,
    ) -> Self {
        Self {
            config,
            manifests,
            mesh,
            sidecar,
            encoder,
            error_logger,
        }
    }

    /// Creates a context backed by a single adapter implementing every
    /// cluster port.
    #[must_use]
    pub fn for_cluster<A>(
        config: Arc<AdapterConfig>,
        cluster: &Arc<A>,
        encoder: Arc<dyn ManifestEncoder>,
        error_logger: Arc<dyn ErrorLogger>,
    ) -> Self
    where
        A: ManifestApplier + MeshInstaller + SidecarInjector + 'static,
    {
        Self::new(
            config,
            cluster.clone(),
            cluster.clone(),
            cluster.clone(),
            encoder,
            error_logger,
        )
    }

    /// Returns the adapter configuration.
    #[must_use]
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Returns the manifest port.
    #[must_use]
    pub fn manifests(&self) -> &dyn ManifestApplier {
        self.manifests.as_ref()
    }

    /// Returns the mesh install port.
    #[must_use]
    pub fn mesh(&self) -> &dyn MeshInstaller {
        self.mesh.as_ref()
    }

    /// Returns the sidecar injection port.
    #[must_use]
    pub fn sidecar(&self) -> &dyn SidecarInjector {
        self.sidecar.as_ref()
    }

    /// Returns the manifest encoder.
    #[must_use]
    pub fn encoder(&self) -> &dyn ManifestEncoder {
        self.encoder.as_ref()
    }

    /// Returns the error logger.
    #[must_use]
    pub fn error_logger(&self) -> &dyn ErrorLogger {
        self.error_logger.as_ref()
    }
}
