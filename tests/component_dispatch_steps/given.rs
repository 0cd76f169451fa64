//! Given steps for component dispatch BDD scenarios.

use super::world::DispatchWorld;
use eyre::WrapErr;
use oam_dispatch::{
    config::{DEFAULT_API_VERSION_ANNOTATION, DEFAULT_KIND_ANNOTATION},
    oam::domain::{Component, ComponentReference, ConfigurationTrait},
};
use rstest_bdd_macros::given;
use serde_json::Value;

#[given(r#"a core component "{name}" of type "{component_type}" without annotations"#)]
fn bare_core_component(
    world: &mut DispatchWorld,
    name: String,
    component_type: String,
) -> Result<(), eyre::Report> {
    let component = Component::new(name, component_type).wrap_err("build bare component")?;
    world.components.push(component);
    Ok(())
}

#[given(r#"a core component "{name}" of kind "{kind}""#)]
fn annotated_core_component(
    world: &mut DispatchWorld,
    name: String,
    kind: String,
) -> Result<(), eyre::Report> {
    let component = Component::new(name, format!("{kind}.OSM"))
        .wrap_err("build core component")?
        .with_namespace("bookstore")
        .with_annotation(DEFAULT_API_VERSION_ANNOTATION, "v1")
        .with_annotation(DEFAULT_KIND_ANNOTATION, kind);
    world.components.push(component);
    Ok(())
}

#[given(r#"a mesh component "{name}" without a version"#)]
fn unversioned_mesh_component(world: &mut DispatchWorld, name: String) -> Result<(), eyre::Report> {
    let component = Component::new(name, "OSMMesh")
        .wrap_err("build mesh component")?
        .with_namespace("osm-system");
    world.components.push(component);
    Ok(())
}

#[given(r#"a mesh component "{name}" with version "{version}""#)]
fn versioned_mesh_component(
    world: &mut DispatchWorld,
    name: String,
    version: String,
) -> Result<(), eyre::Report> {
    let component = Component::new(name, "OSMMesh")
        .wrap_err("build mesh component")?
        .with_namespace("osm-system")
        .with_version(version);
    world.components.push(component);
    Ok(())
}

#[given(r#"namespace "{namespace}" rejects label changes"#)]
fn namespace_rejects_labels(
    world: &mut DispatchWorld,
    namespace: String,
) -> Result<(), eyre::Report> {
    world
        .cluster
        .fail_namespace(namespace, "namespace is protected")
        .map_err(|err| eyre::eyre!("failure injection failed: {err}"))
}

#[given(r#"service "{service}" has the sidecar trait for namespaces "{namespaces}""#)]
fn service_has_sidecar_trait(
    world: &mut DispatchWorld,
    service: String,
    namespaces: String,
) -> Result<(), eyre::Report> {
    let listed: Vec<Value> = namespaces
        .split(',')
        .map(|namespace| Value::from(namespace.trim()))
        .collect();
    let configuration_trait = ConfigurationTrait::new("automaticSidecarInjection.OSM")
        .wrap_err("build sidecar trait")?
        .with_property("namespaces", Value::Array(listed));
    world.configuration = world
        .configuration
        .clone()
        .with_component(ComponentReference::new(service).with_trait(configuration_trait));
    Ok(())
}
