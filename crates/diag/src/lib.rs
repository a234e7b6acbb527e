//! Diagnostics layer for OpenSearch Doctor.
//!
//! This crate turns raw cluster telemetry into operator-facing text: it
//! filters hot-thread dumps down to the busy threads, dedupes task tables,
//! estimates recovery completion times, and builds Dashboards Discover
//! deep links. The [`Diagnostics`] facade wraps a [`TelemetrySource`] and
//! exposes every check as a named operation that degrades faults into an
//! error text block instead of propagating them.

pub mod discover;
pub mod facade;
pub mod filters;
pub mod recovery;
pub mod source;

pub use discover::{DiscoverUrlParams, build_discover_url};
pub use facade::{Diagnostics, TextBlock};
pub use recovery::{ClusterSummary, RateEstimate, RecoveryStatus, ShardProgress};
pub use source::TelemetrySource;
