//! Shared world state for component dispatch BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use oam_dispatch::{
    config::AdapterConfig,
    oam::{
        adapters::{
            JsonManifestEncoder, TracingErrorLogger,
            memory::{InMemoryCluster, RecordingEventSink},
        },
        domain::{ApplicationConfiguration, BatchReport, ClusterTargets, Component},
        services::{ComponentDispatchService, HandlerContext, HandlerRegistry, TraitProcessor},
    },
};
use rstest::fixture;

/// Scenario world for component dispatch behaviour tests.
pub struct DispatchWorld {
    /// Cluster adapter shared by every port.
    pub cluster: Arc<InMemoryCluster>,
    /// Sink collecting failure notifications.
    pub events: Arc<RecordingEventSink>,
    /// Component dispatcher under test.
    pub dispatcher: ComponentDispatchService<DefaultClock>,
    /// Trait processor under test.
    pub traits: TraitProcessor,
    /// Components queued for the next batch.
    pub components: Vec<Component>,
    /// Configuration queued for trait processing.
    pub configuration: ApplicationConfiguration,
    /// Clusters targeted by every batch.
    pub targets: ClusterTargets,
    /// Report of the last batch.
    pub last_report: Option<BatchReport>,
}

impl DispatchWorld {
    /// Creates a world backed by a fresh in-memory cluster.
    #[must_use]
    pub fn new() -> Self {
        let config = Arc::new(AdapterConfig::default());
        let cluster = Arc::new(InMemoryCluster::new());
        let events = Arc::new(RecordingEventSink::new());
        let context = HandlerContext::for_cluster(
            config.clone(),
            &cluster,
            Arc::new(JsonManifestEncoder),
            Arc::new(TracingErrorLogger),
        );
        let dispatcher = ComponentDispatchService::new(
            context.clone(),
            Arc::new(HandlerRegistry::with_defaults(&config)),
            events.clone(),
            Arc::new(DefaultClock),
        );
        Self {
            cluster,
            events,
            dispatcher,
            traits: TraitProcessor::new(context),
            components: Vec::new(),
            configuration: ApplicationConfiguration::new("scenario"),
            targets: ClusterTargets::new(["kubeconfig"]),
            last_report: None,
        }
    }

    /// Returns the last batch report or a step error.
    ///
    /// # Errors
    ///
    /// Returns an error when no batch has run yet.
    pub fn report(&self) -> Result<&BatchReport, eyre::Report> {
        self.last_report
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no batch has run in this scenario"))
    }
}

impl Default for DispatchWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}
