//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not handle config loading (see `main()` and the config crate).

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "osdoctor")]
#[command(about = "OpenSearch Doctor - Diagnose OpenSearch clusters from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  osdoctor health\n  osdoctor recovery\n  osdoctor mapping logs-2024.01\n  osdoctor search 'logs-*' '{\"query\":{\"match_all\":{}}}'\n  osdoctor discover-url --query 'level:ERROR' --index-pattern-id abc-123 --from now-1h --to now\n  osdoctor -e https://localhost:9200 indices\n"
)]
pub struct Cli {
    /// Base URL of the OpenSearch cluster (e.g., https://localhost:9200)
    #[arg(short, long, global = true, env = "OPENSEARCH_URL")]
    pub endpoint: Option<String>,

    /// Username for basic authentication
    #[arg(short, long, global = true, env = "OPENSEARCH_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, global = true, env = "OPENSEARCH_PASSWORD")]
    pub password: Option<String>,

    /// Base URL of OpenSearch Dashboards, used for Discover deep links
    #[arg(long, global = true, env = "OPENSEARCH_DASHBOARDS_URL")]
    pub dashboards_url: Option<String>,

    /// Connection timeout in seconds
    #[arg(long, global = true, env = "OPENSEARCH_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "OPENSEARCH_SKIP_VERIFY")]
    pub skip_verify: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show cluster health
    Health,

    /// Show cluster-wide statistics
    Stats,

    /// Show progress and completion estimates for active shard recoveries
    Recovery,

    /// Show threads currently consuming CPU across the cluster
    HotThreads,

    /// List running tasks, one line per distinct action
    Tasks,

    /// Show how shards are distributed across nodes
    Shards,

    /// List indices with document counts and sizes
    Indices,

    /// Show the field mapping of an index
    Mapping {
        /// Index name
        index: String,
    },

    /// List composable index templates
    Templates,

    /// List Index State Management policies
    IsmPolicies,

    /// List Dashboards index patterns
    IndexPatterns,

    /// Generate a Dashboards Discover link for a query and time range
    DiscoverUrl {
        /// Lucene query to prefill (e.g., 'level:ERROR')
        #[arg(long)]
        query: String,

        /// Saved index pattern id (see `osdoctor index-patterns`)
        #[arg(long)]
        index_pattern_id: String,

        /// Start of the time range (e.g., 'now-15m', '2024-01-01T00:00:00')
        #[arg(long = "from", allow_hyphen_values = true)]
        from_time: String,

        /// End of the time range (e.g., 'now')
        #[arg(long = "to", allow_hyphen_values = true)]
        to_time: String,
    },

    /// Run a query DSL search against an index
    Search {
        /// Index to search (wildcards allowed, e.g. 'logs-*')
        index: String,

        /// Query DSL body as a JSON string
        body: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// The target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
