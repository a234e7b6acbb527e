//! Centralized constants for the OpenSearch Doctor workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default OpenSearch REST port.
pub const DEFAULT_OPENSEARCH_PORT: u16 = 9200;

// =============================================================================
// Environment Variables
// =============================================================================

/// Cluster endpoint URL, e.g. `https://localhost:9200`.
pub const ENV_URL: &str = "OPENSEARCH_URL";

/// Basic-auth username.
pub const ENV_USERNAME: &str = "OPENSEARCH_USERNAME";

/// Basic-auth password.
pub const ENV_PASSWORD: &str = "OPENSEARCH_PASSWORD";

/// OpenSearch Dashboards base URL used to build Discover deep links.
pub const ENV_DASHBOARDS_URL: &str = "OPENSEARCH_DASHBOARDS_URL";

/// Set to `true` to accept invalid TLS certificates (https only).
pub const ENV_SKIP_VERIFY: &str = "OPENSEARCH_SKIP_VERIFY";

/// HTTP request timeout in seconds.
pub const ENV_TIMEOUT: &str = "OPENSEARCH_TIMEOUT";
