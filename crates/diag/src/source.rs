//! Telemetry source abstraction.
//!
//! [`Diagnostics`](crate::facade::Diagnostics) pulls everything it knows
//! about a cluster through this trait, so checks can run against a stub in
//! tests and against [`OpenSearchClient`] in production.

use async_trait::async_trait;
use opensearch_client::models::{
    ClusterHealth, IndexEntry, IndexPattern, RecoveryEntry, ShardEntry,
};
use opensearch_client::{OpenSearchClient, Result};

/// Read-only view of the cluster telemetry the diagnostics checks consume.
///
/// Every method maps to one upstream request and is expected to be cheap to
/// call repeatedly; implementations must not cache or retry.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    async fn cluster_health(&self) -> Result<ClusterHealth>;

    async fn cluster_stats(&self) -> Result<serde_json::Value>;

    /// Plain-text `_nodes/hot_threads` dump across all nodes.
    async fn hot_threads_dump(&self) -> Result<String>;

    /// Plain-text `_cat/tasks` table including the header row.
    async fn task_table(&self) -> Result<String>;

    /// In-flight shard recoveries; empty when the cluster is idle.
    async fn active_recoveries(&self) -> Result<Vec<RecoveryEntry>>;

    async fn shard_entries(&self) -> Result<Vec<ShardEntry>>;

    async fn index_entries(&self) -> Result<Vec<IndexEntry>>;

    async fn index_mapping(&self, index: &str) -> Result<serde_json::Value>;

    async fn search(
        &self,
        index: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value>;

    async fn find_index_patterns(&self) -> Result<Vec<IndexPattern>>;

    async fn ism_policies(&self) -> Result<serde_json::Value>;

    async fn index_templates(&self) -> Result<serde_json::Value>;
}

#[async_trait]
impl TelemetrySource for OpenSearchClient {
    async fn cluster_health(&self) -> Result<ClusterHealth> {
        OpenSearchClient::cluster_health(self).await
    }

    async fn cluster_stats(&self) -> Result<serde_json::Value> {
        OpenSearchClient::cluster_stats(self).await
    }

    async fn hot_threads_dump(&self) -> Result<String> {
        self.hot_threads().await
    }

    async fn task_table(&self) -> Result<String> {
        OpenSearchClient::task_table(self).await
    }

    async fn active_recoveries(&self) -> Result<Vec<RecoveryEntry>> {
        OpenSearchClient::active_recoveries(self).await
    }

    async fn shard_entries(&self) -> Result<Vec<ShardEntry>> {
        OpenSearchClient::shard_entries(self).await
    }

    async fn index_entries(&self) -> Result<Vec<IndexEntry>> {
        OpenSearchClient::index_entries(self).await
    }

    async fn index_mapping(&self, index: &str) -> Result<serde_json::Value> {
        OpenSearchClient::index_mapping(self, index).await
    }

    async fn search(
        &self,
        index: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        OpenSearchClient::search(self, index, body).await
    }

    async fn find_index_patterns(&self) -> Result<Vec<IndexPattern>> {
        OpenSearchClient::find_index_patterns(self).await
    }

    async fn ism_policies(&self) -> Result<serde_json::Value> {
        OpenSearchClient::ism_policies(self).await
    }

    async fn index_templates(&self) -> Result<serde_json::Value> {
        OpenSearchClient::index_templates(self).await
    }
}
