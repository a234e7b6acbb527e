//! Core configuration types.
//!
//! Responsibilities:
//! - Define the configuration structs consumed by the client and CLI.
//! - Keep secrets in `SecretString` so they never appear in Debug output.
//!
//! Does NOT handle:
//! - Reading environment variables (see loader.rs).
//! - Validation of loaded values (see loader.rs).

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT_SECS;

/// Connection settings for the OpenSearch REST endpoint.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the cluster, normalized without a trailing slash,
    /// e.g. `https://localhost:9200`.
    pub endpoint: String,

    /// Accept invalid TLS certificates. Only honored for https endpoints.
    pub skip_verify: bool,

    /// Timeout applied to every HTTP request.
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://localhost:9200".to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Basic-auth credentials.
///
/// The password is held as a `SecretString`; `Debug` renders it redacted.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password: SecretString,
}

/// Optional OpenSearch Dashboards settings.
///
/// `base_url` is only needed by the Discover deep-link generator; every other
/// operation works without it.
#[derive(Debug, Clone, Default)]
pub struct DashboardsConfig {
    pub base_url: Option<String>,
}

/// Complete application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
    pub dashboards: DashboardsConfig,
}
