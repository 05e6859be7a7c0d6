//! GraphQL transport for registrar
//!
//! This crate provides the request/response model for GraphQL operations, the
//! [`GraphQLTransport`] seam the mutation client is written against, and an
//! HTTP implementation of it built on `reqwest`.

pub mod client;
pub mod config;
pub mod errors;
pub mod types;

// Re-export main types for convenience
pub use client::{GraphQLTransport, HttpTransport};
pub use config::TransportConfig;
pub use errors::TransportError;
pub use types::{GraphQLErrorMessage, GraphQLRequest, GraphQLResponse};
