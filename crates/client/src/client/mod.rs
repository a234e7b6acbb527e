//! Main OpenSearch REST API client and API methods.
//!
//! This module provides the primary [`OpenSearchClient`] for pulling
//! diagnostics telemetry from an OpenSearch cluster.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Credential configuration (handled by [`builder::OpenSearchClientBuilder`])
//!
//! # Invariants
//! - Methods take `&self` and hold no mutable state; a client can be shared
//!   across tasks freely.
//! - Every request is sent exactly once. There is no retry, caching, or
//!   session layer between the methods and the wire.

pub mod builder;

use crate::auth::Credentials;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ClusterHealth, IndexEntry, IndexPattern, RecoveryEntry, ShardEntry};

/// OpenSearch REST API client.
///
/// Use [`OpenSearchClient::builder()`] to create a client:
///
/// ```rust,ignore
/// use opensearch_client::OpenSearchClient;
/// use secrecy::SecretString;
///
/// let client = OpenSearchClient::builder()
///     .base_url("https://localhost:9200".to_string())
///     .credentials("admin".to_string(), SecretString::new("password".into()))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct OpenSearchClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
}

impl OpenSearchClient {
    /// Create a new client builder.
    pub fn builder() -> builder::OpenSearchClientBuilder {
        builder::OpenSearchClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get cluster health.
    pub async fn cluster_health(&self) -> Result<ClusterHealth> {
        endpoints::get_cluster_health(&self.http, &self.base_url, &self.credentials).await
    }

    /// Get cluster-wide statistics as raw JSON.
    pub async fn cluster_stats(&self) -> Result<serde_json::Value> {
        endpoints::get_cluster_stats(&self.http, &self.base_url, &self.credentials).await
    }

    /// Get the plain-text hot-threads dump from all nodes.
    pub async fn hot_threads(&self) -> Result<String> {
        endpoints::get_hot_threads(&self.http, &self.base_url, &self.credentials).await
    }

    /// Get the plain-text task table.
    pub async fn task_table(&self) -> Result<String> {
        endpoints::get_task_table(&self.http, &self.base_url, &self.credentials).await
    }

    /// Get active shard recoveries. Empty when the cluster is idle.
    pub async fn active_recoveries(&self) -> Result<Vec<RecoveryEntry>> {
        endpoints::get_active_recoveries(&self.http, &self.base_url, &self.credentials).await
    }

    /// Get shard placement rows for every index.
    pub async fn shard_entries(&self) -> Result<Vec<ShardEntry>> {
        endpoints::get_shard_entries(&self.http, &self.base_url, &self.credentials).await
    }

    /// Get the index overview table.
    pub async fn index_entries(&self) -> Result<Vec<IndexEntry>> {
        endpoints::get_index_entries(&self.http, &self.base_url, &self.credentials).await
    }

    /// Get the field mapping for an index.
    pub async fn index_mapping(&self, index: &str) -> Result<serde_json::Value> {
        endpoints::get_index_mapping(&self.http, &self.base_url, &self.credentials, index).await
    }

    /// Run a query DSL search against an index.
    pub async fn search(
        &self,
        index: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        endpoints::search(&self.http, &self.base_url, &self.credentials, index, body).await
    }

    /// List Dashboards index patterns.
    pub async fn find_index_patterns(&self) -> Result<Vec<IndexPattern>> {
        endpoints::find_index_patterns(&self.http, &self.base_url, &self.credentials).await
    }

    /// Get Index State Management policies as raw JSON.
    pub async fn ism_policies(&self) -> Result<serde_json::Value> {
        endpoints::get_ism_policies(&self.http, &self.base_url, &self.credentials).await
    }

    /// Get composable index templates as raw JSON.
    pub async fn index_templates(&self) -> Result<serde_json::Value> {
        endpoints::get_index_templates(&self.http, &self.base_url, &self.credentials).await
    }
}
