//! REST endpoint functions, grouped by resource.
//!
//! Responsibilities:
//! - Build request URLs from a normalized base URL.
//! - Send each request exactly once with basic-auth credentials.
//! - Map non-success statuses to [`ClientError::ApiError`] with the body text.
//!
//! Does NOT handle:
//! - Retries or backoff. This client deliberately sends every request once;
//!   transient faults surface to the caller unchanged.
//! - Credential storage (see `auth.rs`) or client construction (see `client/`).

pub mod admin;
pub mod cat;
pub mod cluster;
pub mod dashboards;
pub mod indices;
pub mod url_encoding;

pub use admin::{get_index_templates, get_ism_policies};
pub use cat::{get_active_recoveries, get_index_entries, get_shard_entries, get_task_table};
pub use cluster::{get_cluster_health, get_cluster_stats, get_hot_threads};
pub use dashboards::find_index_patterns;
pub use indices::{get_index_mapping, search};
pub use url_encoding::encode_path_segment;

use reqwest::{RequestBuilder, Response};

use crate::error::{ClientError, Result};

/// Send a request and map non-success statuses to `ApiError`.
pub(crate) async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}
