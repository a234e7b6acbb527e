//! Common test utilities for integration tests.
//!
//! This module provides shared helpers and re-exports commonly used types
//! for testing the OpenSearch client against a wiremock server.

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use opensearch_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use opensearch_client::Credentials;
use secrecy::SecretString;

/// Credentials used by every mock-server test.
///
/// `admin:pw` encodes to the basic-auth header value `Basic YWRtaW46cHc=`.
pub fn test_credentials() -> Credentials {
    Credentials::new("admin".to_string(), SecretString::new("pw".into()))
}

/// The header value produced by [`test_credentials`].
#[allow(dead_code)]
pub const BASIC_AUTH_HEADER: &str = "Basic YWRtaW46cHc=";
