//! Remote catalog API configuration

use crate::error::ConfigResult;
use crate::validation::{validate_http_url, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Placeholder printed instead of a configured token
pub const REDACTED: &str = "<redacted>";

/// Where the GraphQL API lives and how to authenticate against it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// GraphQL endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer token sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Repository used when a command does not name one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: None,
            repository: None,
        }
    }
}

impl Validatable for ApiConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_http_url(&self.endpoint, "endpoint", self.domain_name())?;

        if let Some(ref token) = self.token {
            validate_required_string(token, "token", self.domain_name())?;
            if token.chars().any(|c| c.is_whitespace() || c.is_control()) {
                return Err(self.validation_error("token cannot contain whitespace"));
            }
        }

        if let Some(ref repository) = self.repository {
            validate_required_string(repository, "repository", self.domain_name())?;
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "api"
    }
}

fn default_endpoint() -> String {
    "http://localhost:4000/gql".to_string()
}
