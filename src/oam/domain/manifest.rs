//! Generic resource synthesis.
//!
//! Builds the minimal `apiVersion`/`kind`/`metadata`/`spec` document for a
//! component that has no specialized handler.

use super::{Action, Component, OamError};
use crate::config::AnnotationKeys;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Explicit API version and kind for a synthesized resource.
///
/// Missing parts are derived from the component's annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceType {
    api_version: Option<String>,
    kind: Option<String>,
}

impl ResourceType {
    /// Derives both parts from annotations.
    #[must_use]
    pub const fn from_annotations() -> Self {
        Self {
            api_version: None,
            kind: None,
        }
    }

    /// Supplies both parts explicitly.
    #[must_use]
    pub fn explicit(api_version: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            api_version: Some(api_version.into()),
            kind: Some(kind.into()),
        }
    }

    /// Returns the explicit API version, if any.
    #[must_use]
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref().filter(|value| !value.is_empty())
    }

    /// Returns the explicit kind, if any.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref().filter(|value| !value.is_empty())
    }
}

/// `metadata` block of a synthesized resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Resource name.
    pub name: String,
    /// Annotations copied from the component.
    pub annotations: BTreeMap<String, String>,
    /// Labels copied from the component.
    pub labels: BTreeMap<String, String>,
}

/// Structured resource document forwarded to the manifest port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceManifest {
    api_version: String,
    kind: String,
    metadata: ManifestMetadata,
    spec: Value,
}

impl ResourceManifest {
    /// Synthesizes the resource for a component.
    ///
    /// # Errors
    ///
    /// Returns [`OamError::MissingApiVersion`] or [`OamError::MissingKind`]
    /// when a part is neither supplied nor annotated. The API version is
    /// checked first.
    pub fn synthesize(
        component: &Component,
        resource_type: &ResourceType,
        keys: &AnnotationKeys,
    ) -> Result<Self, OamError> {
        let api_version = resource_type
            .api_version()
            .or_else(|| component.annotation(&keys.api_version))
            .ok_or_else(|| OamError::MissingApiVersion {
                component: component.name().to_owned(),
            })?
            .to_owned();

        let kind = resource_type
            .kind()
            .or_else(|| component.annotation(&keys.kind))
            .ok_or_else(|| OamError::MissingKind {
                component: component.name().to_owned(),
            })?
            .to_owned();

        Ok(Self {
            api_version,
            kind,
            metadata: ManifestMetadata {
                name: component.name().to_owned(),
                annotations: component.annotations().clone(),
                labels: component.labels().clone(),
            },
            spec: component.settings().clone(),
        })
    }

    /// Encodes the document for the manifest port.
    ///
    /// The output is pretty-printed JSON, which every YAML 1.2 reader and
    /// cluster API accepts.
    ///
    /// # Errors
    ///
    /// Returns the encoder error unchanged.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }

    /// Human-readable description of applying this resource.
    #[must_use]
    pub fn action_message(&self, namespace: &str, action: Action) -> String {
        match action {
            Action::Deploy => format!(
                "created {} \"{}\" in namespace \"{namespace}\"",
                self.kind, self.metadata.name
            ),
            Action::Remove => format!(
                "deleted {} config \"{}\" in namespace \"{namespace}\"",
                self.kind, self.metadata.name
            ),
        }
    }

    /// Returns the resolved API version.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns the resolved kind.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the metadata block.
    #[must_use]
    pub const fn metadata(&self) -> &ManifestMetadata {
        &self.metadata
    }

    /// Returns the `spec` payload.
    #[must_use]
    pub const fn spec(&self) -> &Value {
        &self.spec
    }
}
