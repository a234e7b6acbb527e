//! Operator-facing diagnostics operations.
//!
//! Responsibilities:
//! - Expose every diagnostic check as a named operation over a
//!   [`TelemetrySource`], rendered as a [`TextBlock`].
//! - Degrade collaborator faults into `Error: ...` blocks so a flaky
//!   cluster never takes the whole diagnostics surface down with it.
//!
//! Explicitly does NOT handle:
//! - Transport concerns (HTTP, stdio, process lifecycle); callers own how
//!   blocks reach the operator.
//! - Retrying failed telemetry pulls.
//!
//! Invariants / assumptions:
//! - Operations never return `Err` and never panic; the error channel is
//!   the block text itself.
//! - Every operation emits exactly one block.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::discover::{DiscoverUrlParams, build_discover_url};
use crate::filters;
use crate::recovery::{ClusterSummary, RecoveryStatus, ShardProgress};
use crate::source::TelemetrySource;

const NO_HOT_THREADS: &str = "No hot threads detected in the cluster.";
const NO_RUNNING_TASKS: &str = "No tasks currently running in the cluster.";

/// One unit of diagnostics output.
///
/// Serializes as `{"type": "text", "text": "..."}`. Faults share the shape;
/// they are distinguished only by the `Error: ` prefix on the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl TextBlock {
    /// Block carrying ordinary output.
    pub fn text(text: impl Into<String>) -> Self {
        TextBlock {
            kind: "text",
            text: text.into(),
        }
    }

    /// Block carrying a degraded fault, prefixed with `Error: `.
    pub fn error(message: impl fmt::Display) -> Self {
        TextBlock {
            kind: "text",
            text: format!("Error: {message}"),
        }
    }

    /// Whether this block reports a fault.
    pub fn is_error(&self) -> bool {
        self.text.starts_with("Error: ")
    }
}

fn degrade(context: &str, err: impl fmt::Display) -> TextBlock {
    tracing::error!("{context}: {err}");
    TextBlock::error(err)
}

fn render_json<T: Serialize>(value: &T) -> TextBlock {
    match serde_json::to_string_pretty(value) {
        Ok(text) => TextBlock::text(text),
        Err(e) => degrade("Failed to render response as JSON", e),
    }
}

/// Diagnostics surface over a telemetry source.
///
/// Holds no state beyond the source and the optional Dashboards base URL,
/// so a single instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Diagnostics<S> {
    source: S,
    dashboards_url: Option<String>,
}

impl<S: TelemetrySource> Diagnostics<S> {
    pub fn new(source: S) -> Self {
        Diagnostics {
            source,
            dashboards_url: None,
        }
    }

    /// Set the Dashboards base URL used by [`discover_url`](Self::discover_url).
    pub fn with_dashboards_url(mut self, base_url: impl Into<String>) -> Self {
        self.dashboards_url = Some(base_url.into());
        self
    }

    /// Cluster health as pretty-printed JSON.
    pub async fn cluster_health(&self) -> TextBlock {
        tracing::info!("Getting cluster health");
        match self.source.cluster_health().await {
            Ok(health) => render_json(&health),
            Err(e) => degrade("Error getting cluster health", e),
        }
    }

    /// Cluster-wide statistics as pretty-printed JSON.
    pub async fn cluster_stats(&self) -> TextBlock {
        tracing::info!("Getting cluster stats");
        match self.source.cluster_stats().await {
            Ok(stats) => render_json(&stats),
            Err(e) => degrade("Error getting cluster stats", e),
        }
    }

    /// Hot-threads dump reduced to the lines with CPU percentages.
    pub async fn hot_threads(&self) -> TextBlock {
        tracing::info!("Fetching hot threads");
        match self.source.hot_threads_dump().await {
            Ok(dump) => {
                let lines = filters::hot_thread_lines(&dump);
                if lines.is_empty() {
                    TextBlock::text(NO_HOT_THREADS)
                } else {
                    TextBlock::text(lines.join("\n"))
                }
            }
            Err(e) => degrade("Error fetching hot threads", e),
        }
    }

    /// Running tasks, one row per distinct action.
    pub async fn tasks(&self) -> TextBlock {
        tracing::info!("Fetching cluster tasks");
        match self.source.task_table().await {
            Ok(table) => {
                let rows = filters::dedupe_task_lines(&table);
                if rows.is_empty() {
                    TextBlock::text(NO_RUNNING_TASKS)
                } else {
                    TextBlock::text(rows.join("\n"))
                }
            }
            Err(e) => degrade("Error fetching tasks", e),
        }
    }

    /// Per-shard recovery progress, or an overall shard summary when the
    /// cluster has no recovery in flight.
    pub async fn recovery_status(&self) -> TextBlock {
        tracing::info!("Fetching recovery status");
        let status = match self.source.active_recoveries().await {
            Ok(records) if records.is_empty() => {
                match self.source.cluster_health().await {
                    Ok(health) => RecoveryStatus::Idle(ClusterSummary::from(&health)),
                    Err(e) => return degrade("Error fetching recovery status", e),
                }
            }
            Ok(records) => {
                RecoveryStatus::Active(records.iter().map(ShardProgress::from).collect())
            }
            Err(e) => return degrade("Error fetching recovery status", e),
        };

        TextBlock::text(status.to_string())
    }

    /// Shard placement rows plus a per-node shard count.
    pub async fn shard_allocation(&self) -> TextBlock {
        tracing::info!("Fetching shard allocation");
        match self.source.shard_entries().await {
            Ok(entries) => {
                let mut shards_per_node: BTreeMap<String, u64> = BTreeMap::new();
                for entry in &entries {
                    // Unassigned shards have no node; they stay visible in
                    // the distribution rows but count against nothing.
                    if let Some(node) = &entry.node {
                        *shards_per_node.entry(node.clone()).or_insert(0) += 1;
                    }
                }

                render_json(&serde_json::json!({
                    "shard_distribution": entries,
                    "shards_per_node": shards_per_node,
                }))
            }
            Err(e) => degrade("Error fetching shard allocation", e),
        }
    }

    /// Index overview rows as pretty-printed JSON.
    pub async fn list_indices(&self) -> TextBlock {
        tracing::info!("Listing indices");
        match self.source.index_entries().await {
            Ok(entries) => render_json(&entries),
            Err(e) => degrade("Error listing indices", e),
        }
    }

    /// Field mapping for one index as pretty-printed JSON.
    pub async fn index_mapping(&self, index: &str) -> TextBlock {
        tracing::info!("Fetching mapping for index: {index}");
        match self.source.index_mapping(index).await {
            Ok(mapping) => render_json(&mapping),
            Err(e) => degrade("Error fetching index mapping", e),
        }
    }

    /// Query DSL search, response as pretty-printed JSON.
    pub async fn search_documents(&self, index: &str, body: &serde_json::Value) -> TextBlock {
        tracing::info!("Searching in index: {index}");
        match self.source.search(index, body).await {
            Ok(response) => render_json(&response),
            Err(e) => degrade("Error searching documents", e),
        }
    }

    /// Saved index patterns as a JSON array of `{title: id}` entries.
    pub async fn list_index_patterns(&self) -> TextBlock {
        tracing::info!("Searching for index patterns");
        match self.source.find_index_patterns().await {
            Ok(patterns) => {
                let rows: Vec<serde_json::Value> = patterns
                    .into_iter()
                    .map(|pattern| {
                        let mut row = serde_json::Map::new();
                        row.insert(pattern.title, serde_json::Value::String(pattern.id));
                        serde_json::Value::Object(row)
                    })
                    .collect();

                render_json(&rows)
            }
            Err(e) => degrade("Error finding index patterns", e),
        }
    }

    /// Discover deep link for the configured Dashboards instance.
    pub fn discover_url(&self, params: &DiscoverUrlParams) -> TextBlock {
        tracing::info!("Generating Discover view URL");
        match &self.dashboards_url {
            Some(base_url) => TextBlock::text(build_discover_url(base_url, params)),
            None => degrade(
                "Cannot generate Discover URL",
                "dashboards base URL is not configured",
            ),
        }
    }

    /// Index State Management policies as pretty-printed JSON.
    pub async fn ism_policies(&self) -> TextBlock {
        tracing::info!("Fetching ISM policies");
        match self.source.ism_policies().await {
            Ok(policies) => render_json(&policies),
            Err(e) => degrade("Error fetching ISM policies", e),
        }
    }

    /// Composable index templates as pretty-printed JSON.
    pub async fn index_templates(&self) -> TextBlock {
        tracing::info!("Fetching index templates");
        match self.source.index_templates().await {
            Ok(templates) => render_json(&templates),
            Err(e) => degrade("Error fetching index templates", e),
        }
    }

    /// Route an operation by name with JSON-shaped arguments.
    ///
    /// Unknown names and missing or mistyped arguments come back as error
    /// blocks, the same channel every other fault uses.
    pub async fn dispatch(&self, name: &str, args: &serde_json::Value) -> Vec<TextBlock> {
        match name {
            "get_cluster_health" => vec![self.cluster_health().await],
            "get_cluster_stats" => vec![self.cluster_stats().await],
            "get_hot_threads" => vec![self.hot_threads().await],
            "get_tasks" => vec![self.tasks().await],
            "get_recovery_status" => vec![self.recovery_status().await],
            "get_shard_allocation" => vec![self.shard_allocation().await],
            "list_indices" => vec![self.list_indices().await],
            "get_index_mapping" => match required_str(args, "index") {
                Ok(index) => vec![self.index_mapping(index).await],
                Err(block) => vec![block],
            },
            "search_documents" => match (required_str(args, "index"), args.get("body")) {
                (Ok(index), Some(body)) => vec![self.search_documents(index, body).await],
                (Err(block), _) => vec![block],
                (_, None) => vec![TextBlock::error("missing or invalid argument 'body'")],
            },
            "list_index_patterns" => vec![self.list_index_patterns().await],
            "generate_discover_url" => {
                let block = match (
                    required_str(args, "query"),
                    required_str(args, "index_pattern_id"),
                    required_str(args, "from_time"),
                    required_str(args, "to_time"),
                ) {
                    (Ok(query), Ok(index_pattern_id), Ok(from_time), Ok(to_time)) => self
                        .discover_url(&DiscoverUrlParams {
                            query: query.to_string(),
                            index_pattern_id: index_pattern_id.to_string(),
                            from_time: from_time.to_string(),
                            to_time: to_time.to_string(),
                        }),
                    (Err(block), _, _, _)
                    | (_, Err(block), _, _)
                    | (_, _, Err(block), _)
                    | (_, _, _, Err(block)) => block,
                };
                vec![block]
            }
            "get_ism_policies" => vec![self.ism_policies().await],
            "get_index_templates" => vec![self.index_templates().await],
            unknown => {
                tracing::error!("Unknown operation: {unknown}");
                vec![TextBlock::error(format!("unknown operation '{unknown}'"))]
            }
        }
    }
}

fn required_str<'a>(args: &'a serde_json::Value, key: &str) -> Result<&'a str, TextBlock> {
    args.get(key)
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| TextBlock::error(format!("missing or invalid argument '{key}'")))
}
