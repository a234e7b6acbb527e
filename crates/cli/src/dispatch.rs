//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading and client construction (see `main()`).
//!
//! Invariants:
//! - Every handler prints its result itself and reports only an exit code;
//!   by the time dispatch runs, operation failures are text, not errors.

use opensearch_client::OpenSearchClient;
use opensearch_diag::Diagnostics;

use crate::args::Commands;
use crate::commands;
use crate::error::ExitCode;

/// Dispatch a CLI subcommand to its handler.
///
/// `Completions` is also intercepted in `main()` before configuration is
/// loaded; the arm here keeps the match total and the behavior identical
/// should it ever arrive with a built facade.
pub(crate) async fn run_command(
    command: Commands,
    diag: &Diagnostics<OpenSearchClient>,
) -> ExitCode {
    match command {
        Commands::Health => commands::cluster::health(diag).await,
        Commands::Stats => commands::cluster::stats(diag).await,
        Commands::Recovery => commands::cluster::recovery(diag).await,
        Commands::HotThreads => commands::cluster::hot_threads(diag).await,
        Commands::Tasks => commands::cluster::tasks(diag).await,
        Commands::Shards => commands::cluster::shards(diag).await,
        Commands::Indices => commands::indices::list(diag).await,
        Commands::Mapping { index } => commands::indices::mapping(diag, &index).await,
        Commands::Templates => commands::admin::templates(diag).await,
        Commands::IsmPolicies => commands::admin::ism_policies(diag).await,
        Commands::IndexPatterns => commands::dashboards::index_patterns(diag).await,
        Commands::DiscoverUrl {
            query,
            index_pattern_id,
            from_time,
            to_time,
        } => commands::dashboards::discover_url(diag, query, index_pattern_id, from_time, to_time),
        Commands::Search { index, body } => commands::indices::search(diag, &index, &body).await,
        Commands::Completions { shell } => {
            commands::completions::run(shell);
            ExitCode::Success
        }
    }
}
