//! Step definitions for component dispatch BDD scenarios.

pub mod given;
pub mod then;
pub mod world;
