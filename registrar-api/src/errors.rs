//! API error types

use registrar_http::TransportError;
use std::path::PathBuf;
use thiserror::Error;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while parsing documents or running mutations
#[derive(Error, Debug)]
pub enum ApiError {
    /// The document is not well-formed YAML or does not fit the input shape
    #[error("Failed to decode document: {0}")]
    Decode(#[from] serde_yaml::Error),

    /// An intermediate value could not be serialized
    #[error("Failed to encode {0}")]
    Encode(String),

    /// Failure reported by the GraphQL transport, passed through untouched
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response did not carry the expected field
    #[error("Response is missing field `{0}`")]
    MissingField(String),

    /// The document could not be read from disk
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
