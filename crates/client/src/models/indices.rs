//! Index overview models.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{opt_u32_from_string_or_number, opt_u64_from_string_or_number};

/// One row of `GET /_cat/indices?format=json&v=true`.
///
/// `health` and `docs.count` are null for closed indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexEntry {
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub index: String,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "opt_u32_from_string_or_number")]
    pub pri: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32_from_string_or_number")]
    pub rep: Option<u32>,
    #[serde(
        rename = "docs.count",
        default,
        deserialize_with = "opt_u64_from_string_or_number"
    )]
    pub docs_count: Option<u64>,
    #[serde(rename = "store.size", default)]
    pub store_size: Option<String>,
}
