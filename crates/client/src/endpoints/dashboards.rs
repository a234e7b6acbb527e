//! Saved-object queries against the Dashboards system index.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{IndexPattern, SavedObjectSearchResponse};

/// System index holding Dashboards saved objects.
const SAVED_OBJECTS_INDEX: &str = ".kibana";

/// List saved index patterns.
///
/// Runs a term query for saved objects of type `index-pattern` and strips
/// the `index-pattern:` prefix from each document id, leaving the bare id
/// that Discover URLs reference.
pub async fn find_index_patterns(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<Vec<IndexPattern>> {
    let url = format!("{}/{}/_search", base_url, SAVED_OBJECTS_INDEX);
    let body = serde_json::json!({
        "_source": ["index-pattern.title", "_id"],
        "query": {
            "term": {
                "type": "index-pattern"
            }
        }
    });

    let builder = credentials.apply(client.post(&url)).json(&body);
    let response = send_request(builder).await?;

    let resp: serde_json::Value = response.json().await?;
    let parsed: SavedObjectSearchResponse = serde_json::from_value(resp).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse index pattern search: {}", e))
    })?;

    Ok(parsed
        .hits
        .hits
        .into_iter()
        .map(|hit| IndexPattern {
            title: hit.source.index_pattern.title,
            id: hit.id.replace("index-pattern:", ""),
        })
        .collect())
}
