//! Mutation commands: read a document and send it to the catalog

use crate::cli::MutationArgs;
use anyhow::{anyhow, Context, Result};
use registrar_api::{
    load_integration, load_repository_input, load_resource_definition, RegistryClient,
};
use registrar_config::RegistrarConfig;
use tracing::info;

/// What a mutation command registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    ResourceDefinition,
    Integration,
    Repository,
}

impl Target {
    fn describe(&self) -> &'static str {
        match self {
            Target::ResourceDefinition => "resource definition",
            Target::Integration => "integration",
            Target::Repository => "repository attributes",
        }
    }
}

/// Repository named on the command line, else the configured default
pub fn resolve_repository(args: &MutationArgs, config: &RegistrarConfig) -> Result<String> {
    args.repo
        .as_deref()
        .or(config.api.repository.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            anyhow!("No repository given. Pass --repo or set api.repository in the configuration")
        })
}

/// Parse the document named by `args` and run the matching mutation
///
/// Returns the id reported by the catalog.
pub async fn handle_register(
    config: &RegistrarConfig,
    target: Target,
    args: &MutationArgs,
) -> Result<String> {
    let repository = resolve_repository(args, config)?;

    let mut config = config.clone();
    if let Some(token) = &args.token {
        config.api.token = Some(token.clone());
    }

    let client = RegistryClient::from_config(&config)
        .context("Failed to create GraphQL client")?;

    info!(
        "Registering {} from {:?} in repository {}",
        target.describe(),
        args.file,
        repository
    );

    let id = match target {
        Target::ResourceDefinition => {
            let input = load_resource_definition(&args.file)?;
            client.create_resource_definition(&repository, &input).await
        }
        Target::Integration => {
            let input = load_integration(&args.file)?;
            client.create_integration(&repository, &input).await
        }
        Target::Repository => {
            let input = load_repository_input(&args.file)?;
            client.update_repository(&repository, &input).await
        }
    }
    .with_context(|| format!("Failed to register {}", target.describe()))?;

    info!("Registered {} with id {}", target.describe(), id);
    Ok(id)
}
