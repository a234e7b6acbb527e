//! Serde helpers for OpenSearch's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON numbers or strings for
//!   numeric fields. The `_cat` APIs with `format=json` emit every column as
//!   a string (`"shard": "0"`, `"bytes_total": "1048576"`).
//! - Parse percent columns that carry a trailing `%` (`"files_percent": "12.5%"`).
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//! - Normalizing units or performing domain conversions.
//!
//! Invariants / assumptions:
//! - Numeric fields may arrive as `"123"` strings or as `123` numbers
//!   depending on API and version; both must parse.
//! - These helpers must not log or print secrets; errors are generic parse errors.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum F64OrString {
    F64(f64),
    String(String),
}

pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = U64OrString::deserialize(deserializer)?;
    match value {
        U64OrString::U64(v) => Ok(v),
        U64OrString::I64(v) => u64::try_from(v).map_err(D::Error::custom),
        U64OrString::String(s) => s.parse::<u64>().map_err(D::Error::custom),
    }
}

pub fn opt_u64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<U64OrString>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(U64OrString::U64(v)) => Ok(Some(v)),
        Some(U64OrString::I64(v)) => Ok(Some(u64::try_from(v).map_err(D::Error::custom)?)),
        Some(U64OrString::String(s)) => Ok(Some(s.parse::<u64>().map_err(D::Error::custom)?)),
    }
}

pub fn u32_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = U64OrString::deserialize(deserializer)?;
    match value {
        U64OrString::U64(v) => u32::try_from(v).map_err(D::Error::custom),
        U64OrString::I64(v) => u32::try_from(v).map_err(D::Error::custom),
        U64OrString::String(s) => s.parse::<u32>().map_err(D::Error::custom),
    }
}

pub fn opt_u32_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<U64OrString>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(U64OrString::U64(v)) => Ok(Some(u32::try_from(v).map_err(D::Error::custom)?)),
        Some(U64OrString::I64(v)) => Ok(Some(u32::try_from(v).map_err(D::Error::custom)?)),
        Some(U64OrString::String(s)) => Ok(Some(s.parse::<u32>().map_err(D::Error::custom)?)),
    }
}

/// Parse a percent column, accepting `12.5`, `"12.5"`, or `"12.5%"`.
pub fn f64_from_percent_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = F64OrString::deserialize(deserializer)?;
    match value {
        F64OrString::F64(v) => Ok(v),
        F64OrString::String(s) => s
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(D::Error::custom),
    }
}
