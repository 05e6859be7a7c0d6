//! Domain-specific configuration modules

pub mod api;
pub mod http;
pub mod logging;
pub mod utils;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Main registrar configuration combining all domains
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RegistrarConfig {
    /// Remote catalog API configuration
    #[serde(default)]
    pub api: api::ApiConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: http::HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: logging::LoggingConfig,
}

impl RegistrarConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.api.validate()?;
        self.http.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Copy of this configuration that is safe to print
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.api.token.is_some() {
            config.api.token = Some(api::REDACTED.to_string());
        }
        config
    }

    /// Generate a sample configuration file
    pub fn generate_sample() -> String {
        let config = RegistrarConfig::default();
        serde_yaml::to_string(&config)
            .unwrap_or_else(|_| "# Failed to generate sample config".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_hides_token() {
        let mut config = RegistrarConfig::default();
        config.api.token = Some("secret-token".to_string());

        let redacted = config.redacted();
        assert_eq!(redacted.api.token.as_deref(), Some(api::REDACTED));
        assert_eq!(config.api.token.as_deref(), Some("secret-token"));
    }

    #[test]
    fn test_redacted_without_token() {
        let config = RegistrarConfig::default();
        assert_eq!(config.redacted().api.token, None);
    }
}
