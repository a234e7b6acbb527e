//! Configuration management for OpenSearch Doctor.
//!
//! This crate provides types and a loader for assembling OpenSearch
//! connection configuration from environment variables and `.env` files.

pub mod constants;
mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig, DashboardsConfig};
