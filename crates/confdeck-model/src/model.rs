//! Wire types for configurations and their properties.

use serde::{Deserialize, Deserializer, Serialize};

/// A named bundle of typed properties loaded from a resource URI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Configuration {
    /// Resource URI the configuration was loaded from.
    pub uri: String,
    /// Unique configuration name.
    pub name: String,
    /// Declared properties.
    #[serde(default)]
    pub properties: PropertyList,
    /// Whether the configuration is currently loaded.
    #[serde(default, deserialize_with = "flag::deserialize")]
    pub loaded: bool,
    /// Whether the configuration can be written back to its store.
    #[serde(default, deserialize_with = "flag::deserialize")]
    pub storable: bool,
    /// Whether the configuration accepts updates.
    #[serde(default, deserialize_with = "flag::deserialize")]
    pub updateable: bool,
}

impl Configuration {
    /// Number of declared properties.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.property.len()
    }

    /// Look up a property by its exact key.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties.property.iter().find(|p| p.name == key)
    }
}

/// Property collection wrapper matching the `{ "property": [...] }` JSON shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyList {
    /// Ordered properties.
    #[serde(default)]
    pub property: Vec<Property>,
}

impl From<Vec<Property>> for PropertyList {
    fn from(property: Vec<Property>) -> Self {
        Self { property }
    }
}

/// A single named, typed, described value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Property {
    /// Hierarchical key such as `//myapp/admin/email`.
    pub name: String,
    /// Raw string value.
    #[serde(default)]
    pub value: String,
    /// Declared source type name.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// List response envelope: `{ "configuration": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigurationEnvelope {
    /// Configurations in backend order.
    #[serde(default)]
    pub configuration: Vec<Configuration>,
}

/// List entry tagged with its zero-based position in the collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderedConfiguration {
    /// Position in the fetched list.
    pub order: usize,
    /// The configuration itself, flattened alongside `order`.
    #[serde(flatten)]
    pub configuration: Configuration,
}

/// Update payload. Every field is optional so validation can report what is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigurationUpdate {
    /// Target configuration name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement resource URI; the stored one is kept when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Replacement property collection.
    #[serde(default)]
    pub properties: Option<PropertyList>,
    /// Replacement `loaded` flag.
    #[serde(
        default,
        deserialize_with = "flag::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub loaded: Option<bool>,
    /// Replacement `storable` flag.
    #[serde(
        default,
        deserialize_with = "flag::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub storable: Option<bool>,
    /// Replacement `updateable` flag.
    #[serde(
        default,
        deserialize_with = "flag::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub updateable: Option<bool>,
}

impl From<Configuration> for ConfigurationUpdate {
    fn from(config: Configuration) -> Self {
        Self {
            name: Some(config.name),
            uri: Some(config.uri),
            properties: Some(config.properties),
            loaded: Some(config.loaded),
            storable: Some(config.storable),
            updateable: Some(config.updateable),
        }
    }
}

/// RFC9457-compatible problem document surfaced on errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Parameters that failed validation, if applicable.
    pub invalid_params: Option<Vec<ProblemInvalidParam>>,
}

/// Invalid parameter pointer surfaced alongside a [`ProblemDetails`] payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemInvalidParam {
    /// JSON Pointer to the offending field.
    pub pointer: String,
    /// Human-readable description of the validation failure.
    pub message: String,
}

/// Backend JSON writes flags as `"true"`/`"false"` strings; accept both forms.
mod flag {
    use serde::de::{Error, Unexpected};

    use super::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    fn parse<E: Error>(flag: Flag) -> Result<bool, E> {
        match flag {
            Flag::Bool(value) => Ok(value),
            Flag::Text(text) => {
                let text = text.trim();
                if text.eq_ignore_ascii_case("true") {
                    Ok(true)
                } else if text.is_empty() || text.eq_ignore_ascii_case("false") {
                    Ok(false)
                } else {
                    Err(E::invalid_value(
                        Unexpected::Str(text),
                        &"a boolean or \"true\"/\"false\"",
                    ))
                }
            }
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse(Flag::deserialize(deserializer)?)
    }

    pub(super) fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Flag>::deserialize(deserializer)?
            .map(parse)
            .transpose()
    }
}
