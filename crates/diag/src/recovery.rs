//! Shard recovery progress estimation.
//!
//! Responsibilities:
//! - Turn `_cat/recovery` rows into per-shard progress reports with a
//!   transfer rate and an estimated time to completion.
//! - Summarize overall shard health when no recovery is running.
//!
//! Explicitly does NOT handle:
//! - Fetching recovery rows or cluster health.
//! - Influencing recoveries (no allocation commands, no throttling).
//!
//! Invariants / assumptions:
//! - A rate is only reported once at least one byte has moved and time has
//!   passed; until then the report reads `Rate: calculating...`.
//! - Estimates are linear extrapolations of the average rate so far. They
//!   ignore throttling changes mid-recovery.

use std::fmt;

use opensearch_client::models::{ClusterHealth, HealthStatus, RecoveryEntry};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Parse a compact `_cat` duration (`"543ms"`, `"2.1s"`, `"3m"`, `"1.5h"`)
/// into milliseconds.
///
/// Unknown suffixes and unparseable magnitudes yield `0.0` rather than an
/// error; a zero elapsed time downgrades the affected shard to the
/// `calculating...` report instead of failing the whole status call. This
/// also means a bare number like `"123"` reads as zero, matching how the
/// column has always been treated.
pub fn parse_time_millis(raw: &str) -> f64 {
    let parsed = if let Some(magnitude) = raw.strip_suffix("ms") {
        magnitude.parse::<f64>().ok()
    } else if let Some(magnitude) = raw.strip_suffix('s') {
        magnitude.parse::<f64>().ok().map(|v| v * 1_000.0)
    } else if let Some(magnitude) = raw.strip_suffix('m') {
        magnitude.parse::<f64>().ok().map(|v| v * 60.0 * 1_000.0)
    } else if let Some(magnitude) = raw.strip_suffix('h') {
        magnitude.parse::<f64>().ok().map(|v| v * 60.0 * 60.0 * 1_000.0)
    } else {
        None
    };

    parsed.unwrap_or(0.0)
}

/// Render an ETA in the largest unit that keeps the number readable.
pub fn format_eta(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{seconds:.0} seconds")
    } else if seconds < 3600.0 {
        format!("{:.1} minutes", seconds / 60.0)
    } else {
        format!("{:.1} hours", seconds / 3600.0)
    }
}

/// Average transfer rate observed so far and the ETA it implies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateEstimate {
    pub mb_per_sec: f64,
    pub eta_seconds: f64,
}

/// Progress report for one recovering shard.
#[derive(Debug, Clone, PartialEq)]
pub struct ShardProgress {
    pub index: String,
    pub shard: u32,
    pub stage: String,
    pub files_percent: f64,
    pub bytes_percent: f64,
    /// `None` until at least one byte has been recovered over a nonzero
    /// elapsed time.
    pub estimate: Option<RateEstimate>,
}

impl From<&RecoveryEntry> for ShardProgress {
    fn from(entry: &RecoveryEntry) -> Self {
        let elapsed_ms = parse_time_millis(&entry.time);

        let estimate = if entry.bytes_recovered > 0 && elapsed_ms > 0.0 {
            let mb_per_sec =
                (entry.bytes_recovered as f64 / BYTES_PER_MB) / (elapsed_ms / 1_000.0);
            // A target shrinking mid-recovery can leave the total behind the
            // recovered count; clamp instead of reporting a negative ETA.
            let remaining = entry.bytes_total.saturating_sub(entry.bytes_recovered);
            let eta_seconds = if mb_per_sec > 0.0 {
                (remaining as f64 / BYTES_PER_MB) / mb_per_sec
            } else {
                0.0
            };
            Some(RateEstimate {
                mb_per_sec,
                eta_seconds,
            })
        } else {
            None
        };

        ShardProgress {
            index: entry.index.clone(),
            shard: entry.shard,
            stage: entry.stage.clone(),
            files_percent: entry.files_percent,
            bytes_percent: entry.bytes_percent,
            estimate,
        }
    }
}

impl fmt::Display for ShardProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Index: {}, Shard: {}", self.index, self.shard)?;
        writeln!(f, "Stage: {}", self.stage)?;
        writeln!(
            f,
            "Progress: files={:.1}%, bytes={:.1}%",
            self.files_percent, self.bytes_percent
        )?;
        match &self.estimate {
            Some(estimate) => {
                writeln!(f, "Rate: {:.1} MB/sec", estimate.mb_per_sec)?;
                writeln!(
                    f,
                    "Est. time remaining: {}",
                    format_eta(estimate.eta_seconds)
                )
            }
            None => writeln!(f, "Rate: calculating..."),
        }
    }
}

/// Shard-level health snapshot shown when nothing is recovering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterSummary {
    pub status: HealthStatus,
    pub active_shards: u64,
    pub initializing_shards: u64,
    pub unassigned_shards: u64,
}

impl ClusterSummary {
    /// Shards the cluster knows about: active, initializing, or unassigned.
    pub fn total_shards(&self) -> u64 {
        self.active_shards + self.unassigned_shards + self.initializing_shards
    }

    /// Active shards as a percentage of [`total_shards`](Self::total_shards).
    ///
    /// An empty cluster has nothing missing, so zero shards reads as 100%.
    pub fn active_percent(&self) -> f64 {
        let total = self.total_shards();
        if total > 0 {
            (self.active_shards as f64 / total as f64) * 100.0
        } else {
            100.0
        }
    }
}

impl From<&ClusterHealth> for ClusterSummary {
    fn from(health: &ClusterHealth) -> Self {
        ClusterSummary {
            status: health.status,
            active_shards: health.active_shards,
            initializing_shards: health.initializing_shards,
            unassigned_shards: health.unassigned_shards,
        }
    }
}

impl fmt::Display for ClusterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "No active recoveries. Cluster status: {}", self.status)?;
        writeln!(
            f,
            "Active shards: {}/{} ({:.1}%)",
            self.active_shards,
            self.total_shards(),
            self.active_percent()
        )?;
        writeln!(f, "Initializing: {}", self.initializing_shards)?;
        write!(f, "Unassigned: {}", self.unassigned_shards)
    }
}

/// Outcome of a recovery status check.
#[derive(Debug, Clone)]
pub enum RecoveryStatus {
    /// One progress report per recovering shard.
    Active(Vec<ShardProgress>),
    /// Nothing recovering; overall shard counts instead.
    Idle(ClusterSummary),
}

impl fmt::Display for RecoveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryStatus::Active(shards) => {
                let reports: Vec<String> = shards.iter().map(ToString::to_string).collect();
                f.write_str(&reports.join("\n"))
            }
            RecoveryStatus::Idle(summary) => summary.fmt(f),
        }
    }
}
