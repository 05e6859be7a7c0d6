//! Transport configuration

use registrar_config::RegistrarConfig;
use std::fmt;
use std::time::Duration;

/// Settings the HTTP transport needs to reach the GraphQL endpoint
#[derive(Clone)]
pub struct TransportConfig {
    /// GraphQL endpoint URL
    pub endpoint: String,

    /// Bearer token, if the endpoint requires one
    pub token: Option<String>,

    /// Request timeout
    pub timeout: Duration,

    /// Maximum number of redirects to follow
    pub max_redirects: u32,

    /// User agent string
    pub user_agent: String,

    /// Whether to verify SSL certificates
    pub verify_ssl: bool,
}

impl TransportConfig {
    /// Configuration with default HTTP settings for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        let http = registrar_config::HttpConfig::default();
        Self {
            endpoint: endpoint.into(),
            token: None,
            timeout: http.timeout,
            max_redirects: http.max_redirects,
            user_agent: http.user_agent,
            verify_ssl: http.verify_ssl,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&RegistrarConfig> for TransportConfig {
    fn from(config: &RegistrarConfig) -> Self {
        Self {
            endpoint: config.api.endpoint.clone(),
            token: config.api.token.clone(),
            timeout: config.http.timeout,
            max_redirects: config.http.max_redirects,
            user_agent: config.http.user_agent.clone(),
            verify_ssl: config.http.verify_ssl,
        }
    }
}

// Hand-written so tokens never end up in logs.
impl fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("max_redirects", &self.max_redirects)
            .field("user_agent", &self.user_agent)
            .field("verify_ssl", &self.verify_ssl)
            .finish()
    }
}
