//! CLI command implementations

pub mod config;
pub mod register;

pub use config::*;
pub use register::*;
