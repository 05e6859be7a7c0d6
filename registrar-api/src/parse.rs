//! YAML document parsing
//!
//! Decoding is permissive: unknown fields are ignored and missing fields take
//! their zero value. A document either decodes completely or yields an
//! error; partially filled records are never returned.

use crate::errors::{ApiError, ApiResult};
use crate::inputs::{
    null_as_default, IntegrationInput, RepositoryInput, ResourceDefinitionInput, Tag,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::Value as YamlValue;
use std::path::Path;
use tracing::debug;

/// Integration as written in a document, before `spec` is re-encoded
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntegrationDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    icon: String,

    #[serde(default)]
    source_url: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<Tag>,

    #[serde(default)]
    spec: YamlValue,
}

/// Parse a repository document (`dashboards: [{name, uid}]`)
pub fn parse_repository_input(bytes: &[u8]) -> ApiResult<RepositoryInput> {
    let input: RepositoryInput = decode(bytes)?;
    debug!("Parsed repository input with {} dashboards", input.dashboards.len());
    Ok(input)
}

/// Parse a resource definition document with its specification tree
pub fn parse_resource_definition(bytes: &[u8]) -> ApiResult<ResourceDefinitionInput> {
    let input: ResourceDefinitionInput = decode(bytes)?;
    debug!(
        "Parsed resource definition {} with {} top-level fields",
        input.name,
        input.spec.len()
    );
    Ok(input)
}

/// Parse an integration document
///
/// `spec` may hold any YAML structure. It is decoded as an untyped value and
/// re-encoded to YAML text, which becomes [`IntegrationInput::spec`].
pub fn parse_integration(bytes: &[u8]) -> ApiResult<IntegrationInput> {
    let document: IntegrationDocument = decode(bytes)?;

    let spec = serde_yaml::to_string(&document.spec)
        .map_err(|e| ApiError::Encode(format!("integration spec: {}", e)))?;

    debug!("Parsed integration {} ({} bytes of spec)", document.name, spec.len());

    Ok(IntegrationInput {
        name: document.name,
        description: document.description,
        icon: document.icon,
        source_url: document.source_url.filter(|url| !url.is_empty()),
        spec,
        tags: document.tags,
    })
}

/// Read and parse a repository document
pub fn load_repository_input(path: impl AsRef<Path>) -> ApiResult<RepositoryInput> {
    parse_repository_input(&read(path.as_ref())?)
}

/// Read and parse a resource definition document
pub fn load_resource_definition(path: impl AsRef<Path>) -> ApiResult<ResourceDefinitionInput> {
    parse_resource_definition(&read(path.as_ref())?)
}

/// Read and parse an integration document
pub fn load_integration(path: impl AsRef<Path>) -> ApiResult<IntegrationInput> {
    parse_integration(&read(path.as_ref())?)
}

fn decode<T>(bytes: &[u8]) -> ApiResult<T>
where
    T: DeserializeOwned + Default,
{
    // Blank documents carry no fields at all.
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    // Only the first document of a stream is read, and a null document
    // (`~`) is the same as an empty one.
    let value = match serde_yaml::Deserializer::from_slice(bytes).next() {
        Some(document) => Option::<T>::deserialize(document)?,
        None => serde_yaml::from_slice::<Option<T>>(bytes)?,
    };
    Ok(value.unwrap_or_default())
}

fn read(path: &Path) -> ApiResult<Vec<u8>> {
    debug!("Reading document from {}", path.display());
    std::fs::read(path).map_err(|source| ApiError::Io {
        path: path.to_path_buf(),
        source,
    })
}
