//! Index metadata and search endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{encode_path_segment, send_request};
use crate::error::Result;

/// Get the field mapping for an index. `GET /{index}/_mapping`.
pub async fn get_index_mapping(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    index: &str,
) -> Result<serde_json::Value> {
    let url = format!("{}/{}/_mapping", base_url, encode_path_segment(index));

    let builder = credentials.apply(client.get(&url));
    let response = send_request(builder).await?;

    Ok(response.json().await?)
}

/// Run a query against an index. `POST /{index}/_search`.
///
/// `body` is forwarded verbatim as the query DSL.
pub async fn search(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    index: &str,
    body: &serde_json::Value,
) -> Result<serde_json::Value> {
    let url = format!("{}/{}/_search", base_url, encode_path_segment(index));

    let builder = credentials.apply(client.post(&url)).json(body);
    let response = send_request(builder).await?;

    Ok(response.json().await?)
}
