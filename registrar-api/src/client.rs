//! Mutation client

use crate::errors::{ApiError, ApiResult};
use crate::inputs::{IntegrationInput, RepositoryInput, ResourceDefinitionInput};
use crate::mutations::Mutation;
use registrar_config::RegistrarConfig;
use registrar_http::{GraphQLRequest, GraphQLTransport, HttpTransport, TransportConfig};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, info};

/// Sends input records to the catalog and returns the affected entity's id
///
/// Every call is a single request; nothing is cached or retried, and errors
/// from the transport are returned as they were reported.
#[derive(Debug, Clone)]
pub struct RegistryClient<T> {
    transport: T,
}

impl RegistryClient<HttpTransport> {
    /// Client talking HTTP to the endpoint named in the configuration
    pub fn from_config(config: &RegistrarConfig) -> ApiResult<Self> {
        let transport = HttpTransport::new(TransportConfig::from(config))?;
        Ok(Self::new(transport))
    }
}

impl<T: GraphQLTransport> RegistryClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Attach a resource definition schema to `repository`
    pub async fn create_resource_definition(
        &self,
        repository: &str,
        input: &ResourceDefinitionInput,
    ) -> ApiResult<String> {
        self.execute(Mutation::UpdateResourceDefinition, repository, input).await
    }

    /// Register an integration under `repository`
    pub async fn create_integration(
        &self,
        repository: &str,
        input: &IntegrationInput,
    ) -> ApiResult<String> {
        self.execute(Mutation::CreateIntegration, repository, input).await
    }

    /// Replace the attributes (dashboards) of `repository`
    pub async fn update_repository(
        &self,
        repository: &str,
        input: &RepositoryInput,
    ) -> ApiResult<String> {
        self.execute(Mutation::UpdateRepository, repository, input).await
    }

    async fn execute<I>(&self, mutation: Mutation, repository: &str, input: &I) -> ApiResult<String>
    where
        I: Serialize + Sync,
    {
        info!(
            "Running {} for repository {}",
            mutation.operation_name(),
            repository
        );

        let request = build_request(mutation, repository, input)?;
        let data = self.transport.run(&request).await?;
        let id = extract_id(&data, mutation.root_field())?;

        debug!("{} returned id {}", mutation.operation_name(), id);
        Ok(id)
    }
}

fn build_request<I>(mutation: Mutation, repository: &str, input: &I) -> ApiResult<GraphQLRequest>
where
    I: Serialize,
{
    let variable = mutation.input_variable();
    GraphQLRequest::new(mutation.template())
        .var(variable, input)
        .and_then(|request| request.var("name", repository))
        .map_err(|e| {
            ApiError::Encode(format!("variables for {}: {}", mutation.operation_name(), e))
        })
}

fn extract_id(data: &JsonValue, root_field: &str) -> ApiResult<String> {
    data.get(root_field)
        .and_then(|entity| entity.get("id"))
        .and_then(JsonValue::as_str)
        .map(str::to_string)
        .ok_or_else(|| ApiError::MissingField(format!("{}.id", root_field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_request_binds_name_and_attributes() {
        let input = RepositoryInput::default();
        let request = build_request(Mutation::UpdateRepository, "airflow", &input).unwrap();

        assert_eq!(request.query, Mutation::UpdateRepository.template());
        assert_eq!(request.variables["name"], json!("airflow"));
        assert_eq!(request.variables["attrs"], json!({"dashboards": []}));
        assert!(!request.variables.contains_key("input"));
    }

    #[test]
    fn test_extract_id() {
        let data = json!({"createIntegration": {"id": "0f8c-42"}});
        assert_eq!(extract_id(&data, "createIntegration").unwrap(), "0f8c-42");

        let err = extract_id(&data, "updateRepository").unwrap_err();
        assert!(matches!(err, ApiError::MissingField(field) if field == "updateRepository.id"));

        let null_entity = json!({"createIntegration": null});
        assert!(extract_id(&null_entity, "createIntegration").is_err());
    }
}
