//! Transport error types

/// Error type for GraphQL transport operations
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("Response did not contain a data object")]
    MissingData,

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid header value for {0}")]
    InvalidHeader(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
