//! `_cat` API endpoints (tabular telemetry).

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{IndexEntry, RecoveryEntry, ShardEntry};

/// Get active shard recoveries.
/// `GET /_cat/recovery?format=json&active_only=true&v=true`.
///
/// Returns an empty vector when no recovery is in flight.
pub async fn get_active_recoveries(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<Vec<RecoveryEntry>> {
    let url = format!("{}/_cat/recovery", base_url);

    let builder = credentials.apply(client.get(&url)).query(&[
        ("format", "json"),
        ("active_only", "true"),
        ("v", "true"),
    ]);
    let response = send_request(builder).await?;

    let resp: serde_json::Value = response.json().await?;
    let entries: Vec<RecoveryEntry> = serde_json::from_value(resp).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse recovery table: {}", e))
    })?;
    Ok(entries)
}

/// Get the task table as plain text. `GET /_cat/tasks?v=true`.
///
/// The `v=true` header row is kept; downstream filtering dedupes on the
/// first column.
pub async fn get_task_table(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<String> {
    let url = format!("{}/_cat/tasks", base_url);

    let builder = credentials.apply(client.get(&url)).query(&[("v", "true")]);
    let response = send_request(builder).await?;

    Ok(response.text().await?)
}

/// Get shard placement rows.
/// `GET /_cat/shards?h=index,shard,prirep,node&format=json`.
pub async fn get_shard_entries(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<Vec<ShardEntry>> {
    let url = format!("{}/_cat/shards", base_url);

    let builder = credentials
        .apply(client.get(&url))
        .query(&[("h", "index,shard,prirep,node"), ("format", "json")]);
    let response = send_request(builder).await?;

    let resp: serde_json::Value = response.json().await?;
    let entries: Vec<ShardEntry> = serde_json::from_value(resp)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse shard table: {}", e)))?;
    Ok(entries)
}

/// Get the index overview. `GET /_cat/indices?format=json&v=true`.
pub async fn get_index_entries(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<Vec<IndexEntry>> {
    let url = format!("{}/_cat/indices", base_url);

    let builder = credentials
        .apply(client.get(&url))
        .query(&[("format", "json"), ("v", "true")]);
    let response = send_request(builder).await?;

    let resp: serde_json::Value = response.json().await?;
    let entries: Vec<IndexEntry> = serde_json::from_value(resp)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse index table: {}", e)))?;
    Ok(entries)
}
