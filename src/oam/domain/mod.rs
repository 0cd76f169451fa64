//! Domain model for component dispatch.
//!
//! Components, configuration traits, synthesized resource manifests, event
//! notifications and batch outcomes live here. Cluster access stays behind
//! the [`crate::oam::ports`] boundary.

mod action;
mod cluster;
mod component;
mod configuration;
mod error;
mod event;
mod manifest;
mod merge;
mod outcome;

pub use action::Action;
pub use cluster::ClusterTargets;
pub use component::Component;
pub use configuration::{
    ApplicationConfiguration, ComponentReference, ConfigurationTrait, NamespaceList,
    namespaces_property,
};
pub use error::{ComponentDomainError, ErrorKind, OamError};
pub use event::{EventNotification, EventSeverity, OperationId};
pub use manifest::{ManifestMetadata, ResourceManifest, ResourceType};
pub use merge::{MergedError, merge_errors, merge_messages};
pub use outcome::{BatchReport, ItemFailure, OperationOutcome};

pub(crate) use outcome::BatchAccumulator;
