//! Domain-driven configuration management for registrar
//!
//! Configuration is split by functional domain (remote API, HTTP client,
//! logging), each with its own defaults and validation. Files are YAML and
//! every setting can be overridden from `REGISTRAR_*` environment variables.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

// Re-export domain configurations
pub use domains::{
    api::ApiConfig, http::HttpConfig, logging::LoggingConfig, RegistrarConfig,
};

// Re-export utilities
pub use domains::utils::serde_duration;
