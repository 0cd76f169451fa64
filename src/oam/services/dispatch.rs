//! Component dispatch loop.

use super::{HandlerContext, HandlerRegistry, ResolvedHandler, apply_core_component};
use crate::oam::domain::{
    Action, BatchAccumulator, BatchReport, ClusterTargets, Component, EventNotification,
    OperationId, OperationOutcome, ResourceType,
};
use crate::oam::ports::EventSink;
use mockable::Clock;
use std::sync::Arc;

/// Dispatches components to their handlers and aggregates the outcomes.
///
/// Items run strictly in input order. A failing item is reported to the
/// event sink and recorded; it never stops the remaining items.
#[derive(Clone)]
pub struct ComponentDispatchService<C>
where
    C: Clock + Send + Sync,
{
    context: HandlerContext,
    registry: Arc<HandlerRegistry>,
    events: Arc<dyn EventSink>,
    clock: Arc<C>,
}

impl<C> ComponentDispatchService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a dispatch service.
    #[must_use]
    pub fn new(
        context: HandlerContext,
        registry: Arc<HandlerRegistry>,
        events: Arc<dyn EventSink>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            context,
            registry,
            events,
            clock,
        }
    }

    /// Handles every component once and merges the results.
    ///
    /// The report's message holds the handler messages of the components
    /// that succeeded; its error holds one entry per failed component.
    #[must_use]
    pub fn handle_components(
        &self,
        components: &[Component],
        action: Action,
        targets: &ClusterTargets,
    ) -> BatchReport {
        let mut batch = BatchAccumulator::new();
        for (index, component) in components.iter().enumerate() {
            batch.record(self.handle_component(index, component, action, targets));
        }
        let report = batch.finish();
        tracing::info!(
            %action,
            components = components.len(),
            failed = report.error().map_or(0, |error| error.len()),
            "component batch finished"
        );
        report
    }

    fn handle_component(
        &self,
        index: usize,
        component: &Component,
        action: Action,
        targets: &ClusterTargets,
    ) -> OperationOutcome {
        let operation_id = OperationId::new();
        let display_type = self.context.config().display_type(component.component_type());
        let resolved = self.registry.resolve(component.component_type());
        tracing::debug!(
            %operation_id,
            component = component.name(),
            component_type = component.component_type(),
            handler = ?resolved,
            "dispatching component"
        );

        let result = match resolved {
            ResolvedHandler::Specialized(handler) => {
                handler.handle(&self.context, component, action, targets)
            }
            ResolvedHandler::CoreResource => apply_core_component(
                &self.context,
                component,
                &ResourceType::from_annotations(),
                action,
                targets,
            ),
        };

        match result {
            Ok(message) => {
                let verb = action.completed_verb();
                let outcome = OperationOutcome::new(
                    operation_id,
                    index,
                    component.name(),
                    format!("{}: {display_type} {verb} successfully", component.name()),
                    format!(
                        "The {} of type {display_type} has been {verb} successfully",
                        component.name()
                    ),
                )
                .with_message(message);
                tracing::info!(%operation_id, "{}", outcome.summary());
                outcome
            }
            Err(error) => {
                let summary = format!("failed in {} {display_type}", action.in_progress_verb());
                let identity = &self.context.config().identity;
                let notification = EventNotification::failure(
                    operation_id,
                    identity.component_type.as_str(),
                    identity.name.as_str(),
                    summary.as_str(),
                    &error,
                    &*self.clock,
                );
                tracing::warn!(
                    %operation_id,
                    component = component.name(),
                    error_kind = %error.kind(),
                    "{summary}: {error}"
                );
                self.events.publish(&notification);
                OperationOutcome::new(
                    operation_id,
                    index,
                    component.name(),
                    summary,
                    error.to_string(),
                )
                .with_error(error)
            }
        }
    }
}
