//! Cluster telemetry commands: health, stats, recovery, hot threads, tasks, shards.

use opensearch_client::OpenSearchClient;
use opensearch_diag::Diagnostics;

use crate::commands::emit;
use crate::error::ExitCode;

/// Print cluster health as pretty JSON.
pub async fn health(diag: &Diagnostics<OpenSearchClient>) -> ExitCode {
    emit(&diag.cluster_health().await)
}

/// Print cluster-wide statistics as pretty JSON.
pub async fn stats(diag: &Diagnostics<OpenSearchClient>) -> ExitCode {
    emit(&diag.cluster_stats().await)
}

/// Print per-shard recovery progress, or an idle summary when nothing is
/// recovering.
pub async fn recovery(diag: &Diagnostics<OpenSearchClient>) -> ExitCode {
    emit(&diag.recovery_status().await)
}

/// Print the CPU-consuming lines of the cluster hot-threads dump.
pub async fn hot_threads(diag: &Diagnostics<OpenSearchClient>) -> ExitCode {
    emit(&diag.hot_threads().await)
}

/// Print running tasks, deduplicated by action.
pub async fn tasks(diag: &Diagnostics<OpenSearchClient>) -> ExitCode {
    emit(&diag.tasks().await)
}

/// Print shard placement per index and shard counts per node.
pub async fn shards(diag: &Diagnostics<OpenSearchClient>) -> ExitCode {
    emit(&diag.shard_allocation().await)
}
