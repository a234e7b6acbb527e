//! Basic-auth credentials for OpenSearch requests.
//!
//! Responsibilities:
//! - Hold the username/password pair with the password wrapped in `SecretString`.
//! - Attach the pair to outgoing requests as an HTTP basic-auth header.
//!
//! Does NOT handle:
//! - Session tokens or credential refresh. OpenSearch basic auth is stateless,
//!   so every request carries the same header.
//!
//! Invariants:
//! - The password never appears in `Debug` output or error messages.

use secrecy::{ExposeSecret, SecretString};

/// Credential pair applied to every outgoing request.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    /// Create a new credential pair.
    pub fn new(username: String, password: SecretString) -> Self {
        Self { username, password }
    }

    /// The basic-auth username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Attach these credentials to a request.
    pub(crate) fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}
