//! In-memory integration tests for component batches.

use super::helpers::{TestContext, context, core_component, mesh_component, targets};
use oam_dispatch::oam::domain::{Action, ClusterTargets, ErrorKind, EventSeverity};
use rstest::rstest;

#[rstest]
fn mixed_batch_applies_manifests_and_installs_mesh(context: TestContext, targets: ClusterTargets) {
    let components = vec![
        mesh_component("v1.2.0").expect("valid mesh component"),
        core_component("bookstore", "Service").expect("valid component"),
    ];

    let report = context
        .dispatcher
        .handle_components(&components, Action::Deploy, &targets);

    assert!(report.is_success());
    assert_eq!(
        report.message(),
        "osm: mesh v1.2.0 deployed in namespace \"osm-system\"\n\
         created Service \"bookstore\" in namespace \"bookstore\""
    );
    let installs = context.cluster.installs().expect("installs readable");
    assert_eq!(installs.len(), 1);
    let applied = context.cluster.applied().expect("manifests readable");
    let manifest = applied.first().expect("one manifest applied");
    assert_eq!(manifest.kind(), Some("Service"));
    assert_eq!(manifest.name(), Some("bookstore"));
    assert_eq!(manifest.cluster_count, 2);
    assert!(context.events.notifications().is_empty());
}

#[rstest]
fn failing_middle_item_leaves_neighbours_applied(context: TestContext, targets: ClusterTargets) {
    context
        .cluster
        .fail_kind("Secret", "secrets is forbidden")
        .expect("failure injection");
    let components = vec![
        core_component("bookstore", "Service").expect("valid component"),
        core_component("credentials", "Secret").expect("valid component"),
        core_component("bookbuyer", "Deployment").expect("valid component"),
    ];

    let report = context
        .dispatcher
        .handle_components(&components, Action::Deploy, &targets);

    assert_eq!(report.outcomes().len(), 3);
    assert_eq!(
        report.message(),
        "created Service \"bookstore\" in namespace \"bookstore\"\n\
         created Deployment \"bookbuyer\" in namespace \"bookstore\""
    );
    let merged = report.error().expect("middle item failed");
    assert_eq!(
        merged.to_string(),
        "created Secret \"credentials\" in namespace \"bookstore\": secrets is forbidden"
    );
    assert_eq!(merged.for_item(1).count(), 1);
    assert_eq!(merged.by_kind(ErrorKind::ApplyFailed).count(), 1);

    let applied = context.cluster.applied().expect("manifests readable");
    let kinds: Vec<_> = applied.iter().filter_map(|manifest| manifest.kind()).collect();
    assert_eq!(kinds, vec!["Service", "Deployment"]);

    let notifications = context.events.notifications();
    assert_eq!(notifications.len(), 1);
    let notification = notifications.first().expect("one notification");
    assert_eq!(notification.severity(), EventSeverity::Error);
    assert_eq!(notification.summary(), "failed in deploying Secret");
    assert!(notification.is_kind(ErrorKind::ApplyFailed));
}

#[rstest]
fn removal_batch_deletes_and_uninstalls(context: TestContext, targets: ClusterTargets) {
    let components = vec![
        core_component("bookstore", "Service").expect("valid component"),
        mesh_component("v1.2.0").expect("valid mesh component"),
    ];

    let report = context
        .dispatcher
        .handle_components(&components, Action::Remove, &targets);

    assert!(report.is_success());
    let summaries: Vec<_> = report
        .outcomes()
        .iter()
        .map(|outcome| outcome.summary().to_owned())
        .collect();
    assert_eq!(
        summaries,
        vec![
            "bookstore: Service removed successfully".to_owned(),
            "osm: OSMMesh removed successfully".to_owned(),
        ]
    );
    let applied = context.cluster.applied().expect("manifests readable");
    assert!(applied.iter().all(|manifest| manifest.action == Action::Remove));
    let installs = context.cluster.installs().expect("installs readable");
    assert!(installs.iter().all(|install| install.action == Action::Remove));
}

#[rstest]
fn install_failure_is_prefixed_with_component_name(context: TestContext, targets: ClusterTargets) {
    context
        .cluster
        .fail_install("control plane already exists")
        .expect("failure injection");

    let report = context.dispatcher.handle_components(
        &[mesh_component("v1.2.0").expect("valid mesh component")],
        Action::Deploy,
        &targets,
    );

    assert_eq!(report.message(), "");
    assert_eq!(
        report.error().map(ToString::to_string).as_deref(),
        Some("osm: control plane already exists")
    );
    let notifications = context.events.notifications();
    assert_eq!(
        notifications.first().map(|notification| notification.summary()),
        Some("failed in deploying OSMMesh")
    );
}
