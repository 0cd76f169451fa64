//! JSON manifest encoder.

use crate::oam::domain::ResourceManifest;
use crate::oam::ports::{EncodeError, ManifestEncoder};

/// Encodes manifests as pretty-printed JSON.
///
/// JSON is a subset of YAML 1.2, so the output is accepted wherever a YAML
/// resource document is.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonManifestEncoder;

impl ManifestEncoder for JsonManifestEncoder {
    fn encode(&self, manifest: &ResourceManifest) -> Result<Vec<u8>, EncodeError> {
        manifest.to_bytes().map_err(EncodeError::runtime)
    }
}
