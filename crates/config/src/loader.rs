//! Configuration loader.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges `.env` files,
//!   environment variables, and direct builder overrides.
//! - Validate and normalize loaded values before producing a `Config`.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::{
    DEFAULT_TIMEOUT_SECS, ENV_DASHBOARDS_URL, ENV_PASSWORD, ENV_SKIP_VERIFY, ENV_TIMEOUT, ENV_URL,
    ENV_USERNAME, MAX_TIMEOUT_SECS,
};
use crate::error::ConfigError;
use crate::types::{AuthConfig, Config, ConnectionConfig, DashboardsConfig};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Configuration loader that builds a `Config` from environment variables
/// and builder overrides.
#[derive(Default)]
pub struct ConfigLoader {
    endpoint: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    dashboards_url: Option<String>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the `.env` file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    ///
    /// Values already set on the loader (e.g. from CLI flags) are not
    /// overwritten.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the cluster endpoint URL.
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set the basic-auth username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the basic-auth password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the Dashboards base URL used for Discover deep links.
    pub fn with_dashboards_url(mut self, url: String) -> Self {
        self.dashboards_url = Some(url);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .map(|raw| validate_and_normalize_url("endpoint", raw))
            .transpose()?
            .flatten()
            .ok_or(ConfigError::MissingEndpoint)?;

        let (username, password) = match (self.username, self.password) {
            (Some(username), Some(password)) => (username, password),
            _ => return Err(ConfigError::MissingCredentials),
        };

        let dashboards_base_url = self
            .dashboards_url
            .as_deref()
            .map(|raw| validate_and_normalize_url("dashboards_url", raw))
            .transpose()?
            .flatten();

        let connection = ConnectionConfig {
            endpoint,
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };

        Self::validate_timeout(&connection)?;

        Ok(Config {
            connection,
            auth: AuthConfig { username, password },
            dashboards: DashboardsConfig {
                base_url: dashboards_base_url,
            },
        })
    }

    /// Validates the request timeout.
    ///
    /// Checks that the timeout is greater than 0 and does not exceed
    /// `MAX_TIMEOUT_SECS`.
    fn validate_timeout(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }
}

/// Apply environment variable configuration to the loader.
///
/// Loader values that are already set take precedence.
fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.endpoint.is_none() {
        loader.endpoint = env_var_or_none(ENV_URL);
    }
    if loader.username.is_none() {
        loader.username = env_var_or_none(ENV_USERNAME);
    }
    if loader.password.is_none() {
        loader.password = env_var_or_none(ENV_PASSWORD).map(|p| SecretString::new(p.into()));
    }
    if loader.dashboards_url.is_none() {
        loader.dashboards_url = env_var_or_none(ENV_DASHBOARDS_URL);
    }
    if loader.skip_verify.is_none()
        && let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY)
    {
        loader.skip_verify = Some(skip.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_SKIP_VERIFY.to_string(),
            message: "must be true or false".to_string(),
        })?);
    }
    if loader.timeout.is_none()
        && let Some(timeout) = env_var_or_none(ENV_TIMEOUT)
    {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.timeout = Some(Duration::from_secs(secs));
    }
    Ok(())
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank/whitespace-only as unset (returns Ok(None))
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_url(var: &str, raw: &str) -> Result<Option<String>, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: var.to_string(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://localhost:9200): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: format!(
                "scheme must be http or https (e.g. https://localhost:9200), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "host is required (e.g. https://localhost:9200)".into(),
        });
    }

    Ok(Some(parsed.as_str().trim_end_matches('/').to_string()))
}
