//! Input records sent as GraphQL mutation attributes
//!
//! Field names match both the YAML documents and the GraphQL input types.
//! Missing or `null` fields decode to their zero value and unknown fields are
//! ignored.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Named field descriptor; children describe nested fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub spec_type: String,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub required: bool,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub spec: Vec<Specification>,
}

impl Specification {
    pub fn new(name: impl Into<String>, spec_type: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            spec_type: spec_type.into(),
            required,
            spec: Vec::new(),
        }
    }

    /// Attach a child specification
    pub fn with_child(mut self, child: Specification) -> Self {
        self.spec.push(child);
        self
    }

    /// Levels in this subtree, counting this node
    pub fn depth(&self) -> usize {
        1 + self.spec.iter().map(Specification::depth).max().unwrap_or(0)
    }

    /// Nodes in this subtree, counting this node
    pub fn node_count(&self) -> usize {
        1 + self.spec.iter().map(Specification::node_count).sum::<usize>()
    }
}

/// Schema attached to a named resource type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDefinitionInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: Vec<Specification>,
}

/// Key/value label attached to an integration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

/// Integration registration
///
/// `spec` holds YAML text. The catalog accepts arbitrary nested
/// configuration there and validates it on its side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<Tag>,
}

/// Dashboard shipped with a repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub uid: String,
}

/// Repository attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub dashboards: Vec<Dashboard>,
}

/// Treat an explicit `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Boolean that also accepts the YAML 1.1 words (`yes`, `off`, `Y`, ...)
///
/// Documents written for YAML 1.1 parsers use these freely, while serde_yaml
/// only treats `true`/`false` as booleans. `null` reads as `false`.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientBool;

    impl<'de> Visitor<'de> for LenientBool {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a boolean")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
            match value {
                "y" | "Y" | "yes" | "Yes" | "YES" | "on" | "On" | "ON" | "true" | "True"
                | "TRUE" => Ok(true),
                "n" | "N" | "no" | "No" | "NO" | "off" | "Off" | "OFF" | "false" | "False"
                | "FALSE" => Ok(false),
                _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
            }
        }

        fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }

        fn visit_none<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }
    }

    deserializer.deserialize_any(LenientBool)
}
