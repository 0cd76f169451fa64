//! OAM dispatch: applies Open Application Model components and traits to
//! Kubernetes clusters on behalf of a service-mesh adapter.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: components, manifests, outcomes and error aggregation
//! - **Ports**: cluster operations, event streaming and error logging
//! - **Adapters**: in-memory cluster state and tracing-backed sinks
//! - **Services**: component dispatch and trait processing
//!
//! # Modules
//!
//! - [`config`]: Adapter identity, annotation keys and mesh settings
//! - [`oam`]: Component dispatch and application configuration handling

pub mod config;
pub mod oam;
