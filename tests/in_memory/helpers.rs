//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use oam_dispatch::{
    config::{AdapterConfig, DEFAULT_API_VERSION_ANNOTATION, DEFAULT_KIND_ANNOTATION},
    oam::{
        adapters::{
            JsonManifestEncoder, TracingErrorLogger,
            memory::{InMemoryCluster, RecordingEventSink},
        },
        domain::{ClusterTargets, Component, ComponentDomainError},
        services::{ComponentDispatchService, HandlerContext, HandlerRegistry, TraitProcessor},
    },
};
use rstest::fixture;
use serde_json::json;

/// Dispatch service type used by the integration tests.
pub type TestDispatchService = ComponentDispatchService<DefaultClock>;

/// Services wired to one in-memory cluster.
pub struct TestContext {
    /// Cluster adapter shared by every port.
    pub cluster: Arc<InMemoryCluster>,
    /// Sink collecting failure notifications.
    pub events: Arc<RecordingEventSink>,
    /// Component dispatcher under test.
    pub dispatcher: TestDispatchService,
    /// Trait processor under test.
    pub traits: TraitProcessor,
}

/// Provides services backed by a fresh in-memory cluster.
#[fixture]
pub fn context() -> TestContext {
    let config = Arc::new(AdapterConfig::default());
    let cluster = Arc::new(InMemoryCluster::new());
    let events = Arc::new(RecordingEventSink::new());
    let handler_context = HandlerContext::for_cluster(
        config.clone(),
        &cluster,
        Arc::new(JsonManifestEncoder),
        Arc::new(TracingErrorLogger),
    );
    let dispatcher = ComponentDispatchService::new(
        handler_context.clone(),
        Arc::new(HandlerRegistry::with_defaults(&config)),
        events.clone(),
        Arc::new(DefaultClock),
    );
    TestContext {
        cluster,
        events,
        dispatcher,
        traits: TraitProcessor::new(handler_context),
    }
}

/// Provides a two-cluster target set.
#[fixture]
pub fn targets() -> ClusterTargets {
    ClusterTargets::new(["kubeconfig-east", "kubeconfig-west"])
}

/// Builds an annotated core component.
///
/// # Errors
///
/// Returns an error if the component identity is invalid.
pub fn core_component(name: &str, kind: &str) -> Result<Component, ComponentDomainError> {
    Ok(Component::new(name, format!("{kind}.OSM"))?
        .with_namespace("bookstore")
        .with_annotation(DEFAULT_API_VERSION_ANNOTATION, "v1")
        .with_annotation(DEFAULT_KIND_ANNOTATION, kind)
        .with_settings(json!({"selector": {"app": name}})))
}

/// Builds a mesh control-plane component.
///
/// # Errors
///
/// Returns an error if the component identity is invalid.
pub fn mesh_component(version: &str) -> Result<Component, ComponentDomainError> {
    Ok(Component::new("osm", "OSMMesh")?
        .with_namespace("osm-system")
        .with_version(version))
}
