//! Specialized handler registry.
//!
//! The registry is an immutable value built once and passed into the
//! dispatch service. Types without an entry resolve to the declared default,
//! [`ResolvedHandler::CoreResource`].

use super::HandlerContext;
use crate::config::AdapterConfig;
use crate::oam::domain::{Action, ClusterTargets, Component, OamError};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Type-specific handling routine that bypasses generic resource synthesis.
pub trait ComponentHandler: Send + Sync {
    /// Handles one component and returns the message it contributes to the
    /// batch.
    ///
    /// # Errors
    ///
    /// Returns [`OamError`] when the component cannot be handled.
    fn handle(
        &self,
        context: &HandlerContext,
        component: &Component,
        action: Action,
        targets: &ClusterTargets,
    ) -> Result<String, OamError>;
}

/// Result of resolving a component type.
#[derive(Clone, Copy)]
pub enum ResolvedHandler<'a> {
    /// A registered specialized handler.
    Specialized(&'a dyn ComponentHandler),
    /// No entry; synthesize a generic resource from annotations.
    CoreResource,
}

impl fmt::Debug for ResolvedHandler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Specialized(_) => f.write_str("Specialized"),
            Self::CoreResource => f.write_str("CoreResource"),
        }
    }
}

/// Immutable mapping from component type to specialized handler.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: BTreeMap<String, Arc<dyn ComponentHandler>>,
}

impl HandlerRegistry {
    /// Starts an empty registry.
    #[must_use]
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::default()
    }

    /// Registry with the mesh control-plane installer under the configured
    /// mesh component type.
    #[must_use]
    pub fn with_defaults(config: &AdapterConfig) -> Self {
        Self::builder()
            .register(
                config.mesh.component_type.clone(),
                Arc::new(MeshControlPlaneHandler),
            )
            .build()
    }

    /// Resolves the handler for a component type.
    #[must_use]
    pub fn resolve(&self, component_type: &str) -> ResolvedHandler<'_> {
        self.handlers
            .get(component_type)
            .map_or(ResolvedHandler::CoreResource, |handler| {
                ResolvedHandler::Specialized(handler.as_ref())
            })
    }

    /// Returns `true` when a specialized handler is registered for the type.
    #[must_use]
    pub fn contains(&self, component_type: &str) -> bool {
        self.handlers.contains_key(component_type)
    }

    /// Lists the registered component types in sorted order.
    pub fn component_types(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("component_types", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`HandlerRegistry`].
#[derive(Default)]
pub struct HandlerRegistryBuilder {
    handlers: BTreeMap<String, Arc<dyn ComponentHandler>>,
}

impl HandlerRegistryBuilder {
    /// Registers a handler, replacing any previous one for the type.
    #[must_use]
    pub fn register(
        mut self,
        component_type: impl Into<String>,
        handler: Arc<dyn ComponentHandler>,
    ) -> Self {
        self.handlers.insert(component_type.into(), handler);
        self
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> HandlerRegistry {
        HandlerRegistry {
            handlers: self.handlers,
        }
    }
}

/// Installs or removes the mesh control plane.
///
/// Requires the component to declare a version; the namespace is passed to
/// the installer unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeshControlPlaneHandler;

impl ComponentHandler for MeshControlPlaneHandler {
    fn handle(
        &self,
        context: &HandlerContext,
        component: &Component,
        action: Action,
        targets: &ClusterTargets,
    ) -> Result<String, OamError> {
        let version = component.version().trim();
        if version.is_empty() {
            return Err(OamError::InvalidVersion {
                component: component.name().to_owned(),
            });
        }

        let status = context
            .mesh()
            .install(action, version, component.namespace(), targets)
            .map_err(|source| OamError::InstallFailed {
                component: component.name().to_owned(),
                source,
            })?;
        Ok(format!("{}: {status}", component.name()))
    }
}
