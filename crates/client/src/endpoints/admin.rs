//! Index-management plugin and template endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::send_request;
use crate::error::Result;

/// Filter for the ISM policy listing: policy ids, descriptions, states,
/// and the index patterns each template applies to.
const ISM_FILTER_PATH: &str = "policies.policy.policy_id,policies.policy.description,\
policies.policy.states,policies.policy.ism_template.index_patterns";

/// Filter for the template listing: template names, index patterns, and the
/// configured shard counts.
const TEMPLATE_FILTER_PATH: &str = "index_templates.name,\
index_templates.index_template.index_patterns,\
index_templates.index_template.template.settings.index.number_of_shards";

/// Get Index State Management policies. `GET /_plugins/_ism/policies`.
pub async fn get_ism_policies(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<serde_json::Value> {
    let url = format!("{}/_plugins/_ism/policies", base_url);

    let builder = credentials
        .apply(client.get(&url))
        .query(&[("filter_path", ISM_FILTER_PATH)]);
    let response = send_request(builder).await?;

    Ok(response.json().await?)
}

/// Get composable index templates. `GET /_index_template`.
pub async fn get_index_templates(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<serde_json::Value> {
    let url = format!("{}/_index_template", base_url);

    let builder = credentials
        .apply(client.get(&url))
        .query(&[("filter_path", TEMPLATE_FILTER_PATH)]);
    let response = send_request(builder).await?;

    Ok(response.json().await?)
}
