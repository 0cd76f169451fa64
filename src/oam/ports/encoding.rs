//! Resource document encoding port.

use crate::oam::domain::ResourceManifest;
use std::sync::Arc;
use thiserror::Error;

/// Encodes a synthesized resource into the bytes handed to the manifest port.
#[cfg_attr(test, mockall::automock)]
pub trait ManifestEncoder: Send + Sync {
    /// Encodes one resource document.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] when the document cannot be represented in the
    /// target format.
    fn encode(&self, manifest: &ResourceManifest) -> Result<Vec<u8>, EncodeError>;
}

/// Errors returned by manifest encoders.
#[derive(Debug, Clone, Error)]
pub enum EncodeError {
    /// The document holds a value the target format cannot represent.
    #[error("unsupported value: {0}")]
    Unsupported(String),

    /// Generic encoder failure.
    #[error("encoder error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl EncodeError {
    /// Wraps an error from the underlying encoder.
    #[must_use]
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
