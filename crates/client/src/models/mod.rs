//! Data models for OpenSearch API responses.

mod cluster;
mod dashboards;
mod indices;
mod recovery;
mod shards;

pub use cluster::{ClusterHealth, HealthStatus};
pub use dashboards::IndexPattern;
pub(crate) use dashboards::SavedObjectSearchResponse;
pub use indices::IndexEntry;
pub use recovery::RecoveryEntry;
pub use shards::ShardEntry;
