//! Generic "core resource" handling path.

use super::{ComponentHandler, HandlerContext};
use crate::oam::domain::{
    Action, ClusterTargets, Component, OamError, ResourceManifest, ResourceType,
};

/// Synthesizes a resource for `component`, encodes it and forwards it to the
/// manifest port.
///
/// Returns the action message (`created <kind> "<name>" in namespace ...`)
/// on success.
///
/// # Errors
///
/// Returns [`OamError::MissingApiVersion`], [`OamError::MissingKind`],
/// [`OamError::Serialization`] (also reported to the error logger) or
/// [`OamError::ApplyFailed`] prefixed with the action message.
pub fn apply_core_component(
    context: &HandlerContext,
    component: &Component,
    resource_type: &ResourceType,
    action: Action,
    targets: &ClusterTargets,
) -> Result<String, OamError> {
    let manifest =
        ResourceManifest::synthesize(component, resource_type, &context.config().annotations)?;

    let document = context.encoder().encode(&manifest).map_err(|source| {
        let error = OamError::Serialization {
            component: component.name().to_owned(),
            source,
        };
        context.error_logger().log_error(&error);
        error
    })?;

    let message = manifest.action_message(component.namespace(), action);
    tracing::debug!(
        component = component.name(),
        kind = manifest.kind(),
        api_version = manifest.api_version(),
        %action,
        "forwarding synthesized manifest"
    );
    context
        .manifests()
        .apply(&document, action, component.namespace(), targets)
        .map_err(|source| OamError::ApplyFailed {
            message: message.clone(),
            source,
        })?;
    Ok(message)
}

/// Specialized handler for types whose API version and kind are fixed.
///
/// Registering one skips the annotation lookup for that type.
#[derive(Debug, Clone)]
pub struct CoreResourceHandler {
    resource_type: ResourceType,
}

impl CoreResourceHandler {
    /// Creates a handler producing resources of the given API version and kind.
    #[must_use]
    pub fn new(api_version: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            resource_type: ResourceType::explicit(api_version, kind),
        }
    }
}

impl ComponentHandler for CoreResourceHandler {
    fn handle(
        &self,
        context: &HandlerContext,
        component: &Component,
        action: Action,
        targets: &ClusterTargets,
    ) -> Result<String, OamError> {
        apply_core_component(context, component, &self.resource_type, action, targets)
    }
}
