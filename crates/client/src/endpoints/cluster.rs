//! Cluster-level telemetry endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::ClusterHealth;

/// Get cluster health. `GET /_cluster/health`.
pub async fn get_cluster_health(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<ClusterHealth> {
    let url = format!("{}/_cluster/health", base_url);

    let builder = credentials.apply(client.get(&url));
    let response = send_request(builder).await?;

    let resp: serde_json::Value = response.json().await?;
    let health: ClusterHealth = serde_json::from_value(resp).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse cluster health: {}", e))
    })?;
    Ok(health)
}

/// Get cluster-wide statistics. `GET /_cluster/stats`.
///
/// The stats payload is large and version-dependent, so it is returned as
/// raw JSON rather than a typed model.
pub async fn get_cluster_stats(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<serde_json::Value> {
    let url = format!("{}/_cluster/stats", base_url);

    let builder = credentials.apply(client.get(&url));
    let response = send_request(builder).await?;

    Ok(response.json().await?)
}

/// Get the hot-threads dump from all nodes. `GET /_nodes/hot_threads`.
///
/// The response is plain text, one stanza per node.
pub async fn get_hot_threads(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<String> {
    let url = format!("{}/_nodes/hot_threads", base_url);

    let builder = credentials.apply(client.get(&url));
    let response = send_request(builder).await?;

    Ok(response.text().await?)
}
