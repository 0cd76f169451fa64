//! Configuration trait processing.

use super::HandlerContext;
use crate::oam::domain::{
    Action, ApplicationConfiguration, BatchAccumulator, BatchReport, ClusterTargets,
    ComponentReference, ConfigurationTrait, OamError, OperationId, OperationOutcome,
    namespaces_property,
};

/// Applies the cluster-wide effects of configuration traits.
///
/// Only the sidecar injection trait has an effect. Every trait, known or
/// not, contributes an acknowledgment line, including when its effect
/// failed.
#[derive(Clone)]
pub struct TraitProcessor {
    context: HandlerContext,
}

impl TraitProcessor {
    /// Creates a trait processor.
    #[must_use]
    pub const fn new(context: HandlerContext) -> Self {
        Self { context }
    }

    /// Processes every trait of every component reference.
    ///
    /// Failures carry the index of the component reference they belong to.
    #[must_use]
    pub fn handle_application_configuration(
        &self,
        configuration: &ApplicationConfiguration,
        action: Action,
        targets: &ClusterTargets,
    ) -> BatchReport {
        let mut batch = BatchAccumulator::new();
        for (index, reference) in configuration.components().iter().enumerate() {
            for configuration_trait in reference.traits() {
                batch.record(self.handle_trait(
                    index,
                    reference,
                    configuration_trait,
                    action,
                    targets,
                ));
            }
        }
        let report = batch.finish();
        tracing::info!(
            configuration = configuration.name(),
            %action,
            traits = report.outcomes().len(),
            failed = report.error().map_or(0, |error| error.len()),
            "trait batch finished"
        );
        report
    }

    fn handle_trait(
        &self,
        index: usize,
        reference: &ComponentReference,
        configuration_trait: &ConfigurationTrait,
        action: Action,
        targets: &ClusterTargets,
    ) -> OperationOutcome {
        let acknowledgment = format!(
            "applied trait \"{}\" on service \"{}\"",
            configuration_trait.name(),
            reference.component_name()
        );

        let errors = if configuration_trait.name() == self.context.config().mesh.sidecar_trait {
            self.toggle_sidecar_injection(configuration_trait, action, targets)
        } else {
            tracing::debug!(
                trait_name = configuration_trait.name(),
                "trait has no cluster effect"
            );
            Vec::new()
        };

        let detail = if errors.is_empty() {
            format!("trait \"{}\" processed", configuration_trait.name())
        } else {
            format!(
                "trait \"{}\" processed with {} failure(s)",
                configuration_trait.name(),
                errors.len()
            )
        };

        errors.into_iter().fold(
            OperationOutcome::new(
                OperationId::new(),
                index,
                reference.component_name(),
                acknowledgment.as_str(),
                detail,
            )
            .with_message(acknowledgment.as_str()),
            OperationOutcome::with_error,
        )
    }

    fn toggle_sidecar_injection(
        &self,
        configuration_trait: &ConfigurationTrait,
        action: Action,
        targets: &ClusterTargets,
    ) -> Vec<OamError> {
        let list = match namespaces_property(configuration_trait) {
            Ok(list) => list,
            Err(error) => return vec![error],
        };
        if list.dropped() > 0 {
            tracing::warn!(
                trait_name = configuration_trait.name(),
                dropped = list.dropped(),
                "ignoring non-string namespace entries"
            );
        }

        list.namespaces()
            .iter()
            .filter_map(|namespace| {
                self.context
                    .sidecar()
                    .toggle_injection(namespace, action, targets)
                    .err()
                    .map(|source| OamError::NamespaceToggleFailed {
                        namespace: namespace.clone(),
                        source,
                    })
            })
            .collect()
    }
}
