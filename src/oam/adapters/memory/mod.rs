//! In-memory adapters for tests and local deterministic runs.

mod cluster;
mod events;

pub use cluster::{AppliedManifest, InMemoryCluster, MeshInstall, NamespaceToggle};
pub use events::RecordingEventSink;
