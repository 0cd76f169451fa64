//! Orchestration services for component dispatch and trait processing.

mod context;
mod core_resource;
mod dispatch;
mod registry;
mod traits;

pub use context::HandlerContext;
pub use core_resource::{CoreResourceHandler, apply_core_component};
pub use dispatch::ComponentDispatchService;
pub use registry::{
    ComponentHandler, HandlerRegistry, HandlerRegistryBuilder, MeshControlPlaneHandler,
    ResolvedHandler,
};
pub use traits::TraitProcessor;
