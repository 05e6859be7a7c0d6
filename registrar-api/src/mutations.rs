//! GraphQL mutation templates
//!
//! The template text is part of the contract with the catalog service. Each
//! template binds `$name` (the repository) plus one attributes variable and
//! selects the `id` of the affected entity.

/// Attach a resource definition schema to a repository
pub const UPDATE_RESOURCE_DEFINITION: &str = r#"
	mutation UpdateRepository($name: String!, $input: ResourceDefinitionAttributes!) {
		updateRepository(repositoryName: $name, attributes: {integrationResourceDefinition: $input}) {
			id
		}
	}
"#;

/// Register an integration under a repository
pub const CREATE_INTEGRATION: &str = r#"
	mutation CreateIntegration($name: String!, $attrs: IntegrationAttributes!) {
		createIntegration(repositoryName: $name, attributes: $attrs) {
			id
		}
	}
"#;

/// Update repository attributes (dashboards)
pub const UPDATE_REPOSITORY: &str = r#"
	mutation UpdateRepo($name: String!, $attrs: RepositoryAttributes!) {
		updateRepository(repositoryName: $name, attributes: $attrs) {
			id
		}
	}
"#;

/// The operations the client can send
///
/// Both repository updates hit the `updateRepository` field but with
/// different attribute shapes, so they are separate operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    UpdateResourceDefinition,
    CreateIntegration,
    UpdateRepository,
}

impl Mutation {
    /// Operation document
    pub fn template(&self) -> &'static str {
        match self {
            Mutation::UpdateResourceDefinition => UPDATE_RESOURCE_DEFINITION,
            Mutation::CreateIntegration => CREATE_INTEGRATION,
            Mutation::UpdateRepository => UPDATE_REPOSITORY,
        }
    }

    /// Operation name declared in the template
    pub fn operation_name(&self) -> &'static str {
        match self {
            Mutation::UpdateResourceDefinition => "UpdateRepository",
            Mutation::CreateIntegration => "CreateIntegration",
            Mutation::UpdateRepository => "UpdateRepo",
        }
    }

    /// Variable that carries the input record
    pub fn input_variable(&self) -> &'static str {
        match self {
            Mutation::UpdateResourceDefinition => "input",
            Mutation::CreateIntegration | Mutation::UpdateRepository => "attrs",
        }
    }

    /// Field of `data` that holds the result
    pub fn root_field(&self) -> &'static str {
        match self {
            Mutation::UpdateResourceDefinition | Mutation::UpdateRepository => "updateRepository",
            Mutation::CreateIntegration => "createIntegration",
        }
    }

    pub fn all() -> &'static [Mutation] {
        &[
            Mutation::UpdateResourceDefinition,
            Mutation::CreateIntegration,
            Mutation::UpdateRepository,
        ]
    }
}
