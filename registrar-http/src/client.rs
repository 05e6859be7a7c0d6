//! GraphQL transport implementation

use crate::config::TransportConfig;
use crate::errors::TransportError;
use crate::types::{GraphQLRequest, GraphQLResponse};
use chrono::Utc;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client,
};
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

/// Channel that executes GraphQL operations
///
/// Implementations return the response's `data` object. Every failure,
/// whether network, HTTP status or GraphQL `errors`, is reported as a
/// [`TransportError`].
#[async_trait::async_trait]
pub trait GraphQLTransport: Send + Sync {
    async fn run(&self, request: &GraphQLRequest) -> Result<JsonValue, TransportError>;
}

/// GraphQL over HTTP POST
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Build a transport; the underlying client is created once and reused
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        debug!("Creating HttpTransport: {:?}", config);

        if config.endpoint.trim().is_empty() {
            return Err(TransportError::Config("endpoint cannot be empty".to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref token) = config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| TransportError::InvalidHeader(AUTHORIZATION.to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(!config.verify_ssl)
            .redirect(reqwest::redirect::Policy::limited(
                config.max_redirects as usize,
            ))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }
}

#[async_trait::async_trait]
impl GraphQLTransport for HttpTransport {
    async fn run(&self, request: &GraphQLRequest) -> Result<JsonValue, TransportError> {
        let start_time = Utc::now();
        let operation = request.operation_name().unwrap_or("anonymous");

        info!("Sending GraphQL operation {} to {}", operation, self.endpoint);
        debug!("Variables: {:?}", request.variables.keys().collect::<Vec<_>>());

        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        let elapsed_ms = (Utc::now() - start_time).num_milliseconds();
        info!(
            "GraphQL response for {}: {} ({} ms)",
            operation,
            status.as_u16(),
            elapsed_ms
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GraphQL operation {} failed with HTTP {}", operation, status.as_u16());
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let envelope: GraphQLResponse = serde_json::from_slice(&body)?;

        if !envelope.errors.is_empty() {
            warn!(
                "GraphQL operation {} returned {} error(s)",
                operation,
                envelope.errors.len()
            );
        }

        envelope.into_result()
    }
}
