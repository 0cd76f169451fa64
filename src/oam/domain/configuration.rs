//! Application configuration and the traits attached to component references.

use super::{ComponentDomainError, OamError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named behaviour layered on top of a component reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TraitRecord")]
pub struct ConfigurationTrait {
    name: String,
    properties: Map<String, Value>,
}

#[derive(Deserialize)]
struct TraitRecord {
    name: String,
    #[serde(default)]
    properties: Map<String, Value>,
}

impl TryFrom<TraitRecord> for ConfigurationTrait {
    type Error = ComponentDomainError;

    fn try_from(record: TraitRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            properties: record.properties,
            ..Self::new(record.name)?
        })
    }
}

impl ConfigurationTrait {
    /// Creates a trait without properties.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentDomainError::EmptyTraitName`] when the name is empty
    /// after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ComponentDomainError> {
        let normalized = name.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(ComponentDomainError::EmptyTraitName);
        }
        Ok(Self {
            name: normalized,
            properties: Map::new(),
        })
    }

    /// Sets one property value.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Returns the trait name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trait properties.
    #[must_use]
    pub const fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}

/// A component reference inside an application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentReference {
    component_name: String,
    #[serde(default)]
    traits: Vec<ConfigurationTrait>,
}

impl ComponentReference {
    /// Creates a reference to the named component.
    #[must_use]
    pub fn new(component_name: impl Into<String>) -> Self {
        Self {
            component_name: component_name.into(),
            traits: Vec::new(),
        }
    }

    /// Attaches a trait.
    #[must_use]
    pub fn with_trait(mut self, configuration_trait: ConfigurationTrait) -> Self {
        self.traits.push(configuration_trait);
        self
    }

    /// Returns the referenced component name.
    #[must_use]
    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Returns the attached traits in declaration order.
    #[must_use]
    pub fn traits(&self) -> &[ConfigurationTrait] {
        &self.traits
    }
}

/// Application configuration: component references with their traits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfiguration {
    #[serde(default)]
    name: String,
    #[serde(default)]
    components: Vec<ComponentReference>,
}

impl ApplicationConfiguration {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    /// Appends a component reference.
    #[must_use]
    pub fn with_component(mut self, reference: ComponentReference) -> Self {
        self.components.push(reference);
        self
    }

    /// Returns the configuration name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the component references in declaration order.
    #[must_use]
    pub fn components(&self) -> &[ComponentReference] {
        &self.components
    }
}

/// Namespaces extracted from a trait's `namespaces` property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceList {
    namespaces: Vec<String>,
    dropped: usize,
}

impl NamespaceList {
    /// Returns the string namespaces in declaration order.
    #[must_use]
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    /// Number of non-string elements that were skipped.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }
}

const NAMESPACES_PROPERTY: &str = "namespaces";

/// Reads the `namespaces` property of a trait as a list of strings.
///
/// Non-string elements are skipped and counted in
/// [`NamespaceList::dropped`].
///
/// # Errors
///
/// Returns [`OamError::InvalidTraitProperty`] when the property is absent or
/// is not a sequence.
pub fn namespaces_property(
    configuration_trait: &ConfigurationTrait,
) -> Result<NamespaceList, OamError> {
    let invalid = |reason: &str| OamError::InvalidTraitProperty {
        trait_name: configuration_trait.name().to_owned(),
        property: NAMESPACES_PROPERTY.to_owned(),
        reason: reason.to_owned(),
    };

    let value = configuration_trait
        .properties()
        .get(NAMESPACES_PROPERTY)
        .ok_or_else(|| invalid("property is missing"))?;
    let Value::Array(elements) = value else {
        return Err(invalid("expected a sequence"));
    };

    let mut list = NamespaceList::default();
    for element in elements {
        match element {
            Value::String(namespace) => list.namespaces.push(namespace.clone()),
            _ => list.dropped += 1,
        }
    }
    Ok(list)
}
