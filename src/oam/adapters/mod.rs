//! Adapter implementations for the dispatch ports.

pub mod memory;

mod json;
mod logging;

pub use json::JsonManifestEncoder;
pub use logging::{TracingErrorLogger, TracingEventSink};
