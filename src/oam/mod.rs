//! OAM component dispatch and manifest synthesis.
//!
//! Translates declarative application components and their configuration
//! traits into cluster mutations, then folds the per-item outcomes into a
//! single report. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
