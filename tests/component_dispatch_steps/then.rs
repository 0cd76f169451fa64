//! Then steps for component dispatch BDD scenarios.

use super::world::DispatchWorld;
use rstest_bdd_macros::then;

#[then(r#"the batch fails with a "{kind}" error"#)]
fn batch_fails_with_kind(world: &DispatchWorld, kind: String) -> Result<(), eyre::Report> {
    let report = world.report()?;
    let merged = report
        .error()
        .ok_or_else(|| eyre::eyre!("expected the batch to fail"))?;
    if !merged.errors().iter().any(|failure| failure.kind().as_str() == kind) {
        return Err(eyre::eyre!("expected a {kind} failure, got: {merged}"));
    }
    Ok(())
}

#[then("the batch succeeds")]
fn batch_succeeds(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if let Some(merged) = report.error() {
        return Err(eyre::eyre!("expected success, got: {merged}"));
    }
    Ok(())
}

#[then("the combined message is empty")]
fn combined_message_empty(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let message = world.report()?.message();
    if !message.is_empty() {
        return Err(eyre::eyre!("expected an empty message, got: {message}"));
    }
    Ok(())
}

#[then("the combined message has {count:usize} lines")]
fn combined_message_lines(world: &DispatchWorld, count: usize) -> Result<(), eyre::Report> {
    let lines = world.report()?.message().lines().count();
    if lines != count {
        return Err(eyre::eyre!("expected {count} message lines, found {lines}"));
    }
    Ok(())
}

#[then(r#"the combined error mentions "{text}""#)]
fn combined_error_mentions(world: &DispatchWorld, text: String) -> Result<(), eyre::Report> {
    let rendered = world
        .report()?
        .error()
        .map(ToString::to_string)
        .ok_or_else(|| eyre::eyre!("expected the batch to fail"))?;
    if !rendered.contains(&text) {
        return Err(eyre::eyre!("expected error to mention '{text}', got: {rendered}"));
    }
    Ok(())
}

#[then("{count:usize} failure events were streamed")]
fn failure_events_streamed(world: &DispatchWorld, count: usize) -> Result<(), eyre::Report> {
    let streamed = world.events.notifications().len();
    if streamed != count {
        return Err(eyre::eyre!("expected {count} events, found {streamed}"));
    }
    Ok(())
}

#[then(r#"the cluster holds a "{kind}" manifest"#)]
fn cluster_holds_manifest(world: &DispatchWorld, kind: String) -> Result<(), eyre::Report> {
    let applied = world
        .cluster
        .applied()
        .map_err(|err| eyre::eyre!("reading applied manifests failed: {err}"))?;
    if !applied.iter().any(|manifest| manifest.kind() == Some(kind.as_str())) {
        return Err(eyre::eyre!("expected a {kind} manifest to be applied"));
    }
    Ok(())
}

#[then(r#"every outcome summary contains "{verb}""#)]
fn every_summary_contains(world: &DispatchWorld, verb: String) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.outcomes().is_empty() {
        return Err(eyre::eyre!("expected at least one outcome"));
    }
    for outcome in report.outcomes() {
        if !outcome.summary().contains(&verb) {
            return Err(eyre::eyre!(
                "summary '{}' does not contain '{verb}'",
                outcome.summary()
            ));
        }
    }
    Ok(())
}

#[then(r#"trait "{trait_name}" is acknowledged for service "{service}""#)]
fn trait_acknowledged(
    world: &DispatchWorld,
    trait_name: String,
    service: String,
) -> Result<(), eyre::Report> {
    let expected = format!("applied trait \"{trait_name}\" on service \"{service}\"");
    let message = world.report()?.message();
    if !message.lines().any(|line| line == expected) {
        return Err(eyre::eyre!("expected acknowledgment '{expected}', got: {message}"));
    }
    Ok(())
}

#[then(r#"sidecar injection is enabled on namespace "{namespace}""#)]
fn injection_enabled(world: &DispatchWorld, namespace: String) -> Result<(), eyre::Report> {
    let enabled = world
        .cluster
        .is_injection_enabled(&namespace)
        .map_err(|err| eyre::eyre!("reading namespace labels failed: {err}"))?;
    if !enabled {
        return Err(eyre::eyre!("expected injection on namespace '{namespace}'"));
    }
    Ok(())
}
