//! Shared test utilities for osdoctor integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (credentials, cleared URLs).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Basic-auth credentials are set to dummy values unless overridden.

use assert_cmd::Command;

/// Returns a hermetic `osdoctor` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Dummy credentials are set to satisfy config validation.
/// - Connection env vars are cleared to ensure no leakage from the host.
pub fn osdoctor_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("osdoctor");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Satisfy configuration requirements for non-config tests
    cmd.env("OPENSEARCH_USERNAME", "admin");
    cmd.env("OPENSEARCH_PASSWORD", "test-password");

    // Clear potential host leakage
    cmd.env_remove("OPENSEARCH_URL")
        .env_remove("OPENSEARCH_DASHBOARDS_URL")
        .env_remove("OPENSEARCH_SKIP_VERIFY")
        .env_remove("OPENSEARCH_TIMEOUT");

    cmd
}

/// Returns a hermetic `osdoctor` command pointed at a specific endpoint.
///
/// This is a convenience wrapper around `osdoctor_cmd()` that sets
/// `OPENSEARCH_URL` to the provided value. All other hermeticity guarantees
/// are preserved.
#[allow(dead_code)]
pub fn osdoctor_cmd_with_endpoint(endpoint: &str) -> Command {
    let mut cmd = osdoctor_cmd();
    cmd.env("OPENSEARCH_URL", endpoint);
    cmd
}
