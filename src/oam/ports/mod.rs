//! Port contracts for the collaborators the dispatcher drives.

mod cluster;
mod encoding;
mod observability;

pub use cluster::{ClusterError, ClusterResult, ManifestApplier, MeshInstaller, SidecarInjector};
pub use encoding::{EncodeError, ManifestEncoder};
pub use observability::{ErrorLogger, EventSink};

#[cfg(test)]
pub use cluster::{MockManifestApplier, MockMeshInstaller, MockSidecarInjector};
#[cfg(test)]
pub use encoding::MockManifestEncoder;
#[cfg(test)]
pub use observability::{MockErrorLogger, MockEventSink};
