//! Shard recovery models.

use serde::Deserialize;

use crate::serde_helpers::{f64_from_percent_string, u32_from_string_or_number,
    u64_from_string_or_number};

/// One row of `GET /_cat/recovery?format=json&active_only=true&v=true`.
///
/// `_cat` emits numeric columns as JSON strings and percent columns with a
/// trailing `%`. Byte counters use the `_cat` column names (`bytes_total`,
/// `bytes_recovered`); the index-recovery-API spellings are accepted as
/// aliases.
#[derive(Debug, Clone, Deserialize)]
pub struct RecoveryEntry {
    pub index: String,
    #[serde(deserialize_with = "u32_from_string_or_number")]
    pub shard: u32,
    /// Recovery stage (`init`, `index`, `translog`, `finalize`, `done`).
    #[serde(default = "default_stage")]
    pub stage: String,
    /// Elapsed recovery time in compact form, e.g. `"2.1s"` or `"543ms"`.
    #[serde(default = "default_time")]
    pub time: String,
    #[serde(default, deserialize_with = "f64_from_percent_string")]
    pub files_percent: f64,
    #[serde(default, deserialize_with = "f64_from_percent_string")]
    pub bytes_percent: f64,
    #[serde(
        default,
        deserialize_with = "u64_from_string_or_number",
        alias = "total_bytes"
    )]
    pub bytes_total: u64,
    #[serde(
        default,
        deserialize_with = "u64_from_string_or_number",
        alias = "recovered_in_bytes"
    )]
    pub bytes_recovered: u64,
}

fn default_stage() -> String {
    "unknown".to_string()
}

fn default_time() -> String {
    "0s".to_string()
}
