//! Async client for the OpenSearch REST API.
//!
//! This crate provides a thin, stateless HTTP client for the telemetry
//! endpoints OpenSearch Doctor consumes: cluster health and stats, `_cat`
//! tables, hot threads, index metadata, search, Dashboards saved objects,
//! and the Index State Management plugin.
//!
//! The client holds no session state and performs no retries; every request
//! is sent exactly once with basic-auth credentials, and failures surface as
//! [`ClientError`] values.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod serde_helpers;

pub use auth::Credentials;
pub use client::OpenSearchClient;
pub use client::builder::OpenSearchClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    ClusterHealth, HealthStatus, IndexEntry, IndexPattern, RecoveryEntry, ShardEntry,
};
