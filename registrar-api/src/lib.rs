//! Catalog registration API for registrar
//!
//! Turns YAML documents describing repositories, integrations and resource
//! definitions into typed inputs, and sends them to the catalog as GraphQL
//! mutations.
//!
//! ```no_run
//! # async fn run() -> Result<(), registrar_api::ApiError> {
//! use registrar_api::{parse_integration, RegistryClient};
//! use registrar_http::{HttpTransport, TransportConfig};
//!
//! let transport = HttpTransport::new(TransportConfig::new("http://localhost:4000/gql"))?;
//! let client = RegistryClient::new(transport);
//!
//! let input = parse_integration(b"name: grafana\nspec: {url: http://grafana}\n")?;
//! let id = client.create_integration("monitoring", &input).await?;
//! println!("{}", id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod errors;
pub mod inputs;
pub mod mutations;
pub mod parse;

// Re-export main types for convenience
pub use client::RegistryClient;
pub use errors::{ApiError, ApiResult};
pub use inputs::{
    Dashboard, IntegrationInput, RepositoryInput, ResourceDefinitionInput, Specification, Tag,
};
pub use mutations::{Mutation, CREATE_INTEGRATION, UPDATE_REPOSITORY, UPDATE_RESOURCE_DEFINITION};
pub use parse::{
    load_integration, load_repository_input, load_resource_definition, parse_integration,
    parse_repository_input, parse_resource_definition,
};
