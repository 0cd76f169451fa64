//! Component value object.

use super::ComponentDomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A named unit of desired state handed to the dispatcher.
///
/// Components arrive already validated against their schema upstream; the
/// constructor only enforces the invariants the dispatcher relies on.
/// Deserialization goes through the same constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ComponentRecord")]
pub struct Component {
    name: String,
    #[serde(rename = "type")]
    component_type: String,
    version: String,
    namespace: String,
    annotations: BTreeMap<String, String>,
    labels: BTreeMap<String, String>,
    settings: Value,
}

/// Wire shape of a [`Component`] before validation.
#[derive(Deserialize)]
struct ComponentRecord {
    name: String,
    #[serde(rename = "type")]
    component_type: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    namespace: String,
    #[serde(default)]
    annotations: BTreeMap<String, String>,
    #[serde(default)]
    labels: BTreeMap<String, String>,
    #[serde(default)]
    settings: Value,
}

impl TryFrom<ComponentRecord> for Component {
    type Error = ComponentDomainError;

    fn try_from(record: ComponentRecord) -> Result<Self, Self::Error> {
        let mut component = Self::new(record.name, record.component_type)?;
        component.version = record.version;
        component.namespace = record.namespace;
        component.annotations = record.annotations;
        component.labels = record.labels;
        component.settings = record.settings;
        Ok(component)
    }
}

impl Component {
    /// Creates a component with a name and handler-selecting type.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentDomainError`] when the name or the type is empty
    /// after trimming.
    pub fn new(
        name: impl Into<String>,
        component_type: impl Into<String>,
    ) -> Result<Self, ComponentDomainError> {
        let normalized_name = name.into().trim().to_owned();
        if normalized_name.is_empty() {
            return Err(ComponentDomainError::EmptyComponentName);
        }

        let normalized_type = component_type.into().trim().to_owned();
        if normalized_type.is_empty() {
            return Err(ComponentDomainError::EmptyComponentType(normalized_name));
        }

        Ok(Self {
            name: normalized_name,
            component_type: normalized_type,
            version: String::new(),
            namespace: String::new(),
            annotations: BTreeMap::new(),
            labels: BTreeMap::new(),
            settings: Value::Null,
        })
    }

    /// Sets the declared version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the target namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Adds one annotation, replacing any previous value for the key.
    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// Adds one label, replacing any previous value for the key.
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Sets the free-form settings payload used as the resource `spec`.
    #[must_use]
    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the type string used for handler resolution.
    #[must_use]
    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    /// Returns the declared version, empty when none was given.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the target namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns all annotations.
    #[must_use]
    pub const fn annotations(&self) -> &BTreeMap<String, String> {
        &self.annotations
    }

    /// Looks up a single annotation, treating empty values as absent.
    #[must_use]
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns all labels.
    #[must_use]
    pub const fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    /// Returns the settings payload.
    #[must_use]
    pub const fn settings(&self) -> &Value {
        &self.settings
    }
}
