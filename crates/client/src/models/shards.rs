//! Shard placement models.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::u32_from_string_or_number;

/// One row of `GET /_cat/shards?h=index,shard,prirep,node&format=json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShardEntry {
    pub index: String,
    #[serde(deserialize_with = "u32_from_string_or_number")]
    pub shard: u32,
    /// `p` for primary, `r` for replica.
    pub prirep: String,
    /// Assigned node name. `None` for unassigned shards.
    #[serde(default)]
    pub node: Option<String>,
}
