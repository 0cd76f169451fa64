//! Adapter configuration.
//!
//! Values are resolved in order of precedence:
//! 1. An optional TOML file (see [`AdapterConfig::load`])
//! 2. Built-in defaults
//!
//! Every section and key in the file is optional; absent keys keep their
//! default.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;


/// Annotation carrying the target API version of a core component.
pub const DEFAULT_API_VERSION_ANNOTATION: &str = "pattern.meshery.io.mesh.workload.k8sAPIVersion";

/// Annotation carrying the target kind of a core component.
pub const DEFAULT_KIND_ANNOTATION: &str = "pattern.meshery.io.mesh.workload.k8sKind";

// ─────────────────────────────────────────────────────────────────────────────
// Resolved configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Identity stamped on every event the adapter emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterIdentity {
    /// Component category of the emitter ("adapter").
    pub component_type: String,
    /// Emitter name.
    pub name: String,
}

impl Default for AdapterIdentity {
    fn default() -> Self {
        Self {
            component_type: "adapter".to_owned(),
            name: "osm".to_owned(),
        }
    }
}

/// Annotation keys read by the generic resource synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationKeys {
    /// Key holding the resource API version.
    pub api_version: String,
    /// Key holding the resource kind.
    pub kind: String,
}

impl Default for AnnotationKeys {
    fn default() -> Self {
        Self {
            api_version: DEFAULT_API_VERSION_ANNOTATION.to_owned(),
            kind: DEFAULT_KIND_ANNOTATION.to_owned(),
        }
    }
}

/// Names tied to the managed mesh product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshSettings {
    /// Component type handled by the control-plane installer.
    pub component_type: String,
    /// Suffix stripped from component types in summaries.
    pub display_suffix: String,
    /// Trait name that toggles sidecar injection.
    pub sidecar_trait: String,
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self {
            component_type: "OSMMesh".to_owned(),
            display_suffix: ".OSM".to_owned(),
            sidecar_trait: "automaticSidecarInjection.OSM".to_owned(),
        }
    }
}

/// Complete adapter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Event identity.
    pub identity: AdapterIdentity,
    /// Annotation keys for core components.
    pub annotations: AnnotationKeys,
    /// Mesh product names.
    pub mesh: MeshSettings,
}

impl AdapterConfig {
    /// Parses a TOML document over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid TOML or
    /// contains unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(contents)?;
        Ok(Self::from_file(file))
    }

    /// Reads and parses a TOML file over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let contents = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::Read {
            path: path_ref.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path_ref.display(), "loaded adapter configuration");
        Ok(config)
    }

    /// Strips the mesh display suffix from a component type.
    #[must_use]
    pub fn display_type<'a>(&self, component_type: &'a str) -> &'a str {
        component_type
            .strip_suffix(self.mesh.display_suffix.as_str())
            .unwrap_or(component_type)
    }

    fn from_file(file: FileConfig) -> Self {
        let defaults = Self::default();
        let identity = file.identity.unwrap_or_default();
        let annotations = file.annotations.unwrap_or_default();
        let mesh = file.mesh.unwrap_or_default();

        Self {
            identity: AdapterIdentity {
                component_type: identity
                    .component_type
                    .unwrap_or(defaults.identity.component_type),
                name: identity.name.unwrap_or(defaults.identity.name),
            },
            annotations: AnnotationKeys {
                api_version: annotations
                    .api_version
                    .unwrap_or(defaults.annotations.api_version),
                kind: annotations.kind.unwrap_or(defaults.annotations.kind),
            },
            mesh: MeshSettings {
                component_type: mesh
                    .component_type
                    .unwrap_or(defaults.mesh.component_type),
                display_suffix: mesh
                    .display_suffix
                    .unwrap_or(defaults.mesh.display_suffix),
                sidecar_trait: mesh.sidecar_trait.unwrap_or(defaults.mesh.sidecar_trait),
            },
        }
    }
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        /// File path.
        path: String,
        /// I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is malformed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

// ─────────────────────────────────────────────────────────────────────────────
// File configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    identity: Option<FileIdentity>,
    annotations: Option<FileAnnotations>,
    mesh: Option<FileMesh>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileIdentity {
    component_type: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileAnnotations {
    api_version: Option<String>,
    kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileMesh {
    component_type: Option<String>,
    display_suffix: Option<String>,
    sidecar_trait: Option<String>,
}
