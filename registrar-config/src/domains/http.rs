//! Settings for the HTTP client that carries GraphQL requests

use crate::domains::utils::serde_duration;
use crate::error::ConfigResult;
use crate::validation::{validate_positive, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_REDIRECTS: u32 = 10;

/// Missing keys fall back to [`HttpConfig::default`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout, in seconds on disk
    #[serde(with = "serde_duration")]
    pub timeout: Duration,

    pub max_redirects: u32,

    pub user_agent: String,

    /// Set to `false` to accept self-signed certificates
    pub verify_ssl: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: format!("Registrar/{}", env!("CARGO_PKG_VERSION")),
            verify_ssl: true,
        }
    }
}

impl Validatable for HttpConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(self.timeout.as_secs(), "timeout", self.domain_name())?;
        validate_required_string(&self.user_agent, "user_agent", self.domain_name())?;

        // Sent verbatim as the User-Agent header.
        if self.user_agent.chars().any(char::is_control) {
            return Err(self.validation_error("user_agent cannot contain control characters"));
        }
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_redirects, 10);
        assert!(config.user_agent.starts_with("Registrar/"));
        assert!(config.verify_ssl);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_timeout_and_blank_agent() {
        let config = HttpConfig {
            timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = HttpConfig {
            user_agent: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_control_characters_in_agent() {
        let config = HttpConfig {
            user_agent: "Registrar\r\nX-Injected: 1".to_string(),
            ..Default::default()
        };

        match config.validate().unwrap_err() {
            ConfigError::DomainError { domain, message } => {
                assert_eq!(domain, "http");
                assert!(message.contains("user_agent"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: HttpConfig = serde_yaml::from_str("timeout: 5\nverify_ssl: false\n").unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.verify_ssl);
        assert_eq!(config.max_redirects, 10);
    }
}
