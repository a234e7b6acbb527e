//! Dashboards commands: index patterns and Discover deep links.

use opensearch_client::OpenSearchClient;
use opensearch_diag::{Diagnostics, DiscoverUrlParams};

use crate::commands::emit;
use crate::error::ExitCode;

/// Print the saved index patterns as `{title: id}` pairs.
pub async fn index_patterns(diag: &Diagnostics<OpenSearchClient>) -> ExitCode {
    emit(&diag.list_index_patterns().await)
}

/// Print a Discover URL for the given query and time range.
///
/// Requires a configured Dashboards base URL; without one this prints an
/// error block and exits non-zero.
pub fn discover_url(
    diag: &Diagnostics<OpenSearchClient>,
    query: String,
    index_pattern_id: String,
    from_time: String,
    to_time: String,
) -> ExitCode {
    let params = DiscoverUrlParams {
        query,
        index_pattern_id,
        from_time,
        to_time,
    };

    emit(&diag.discover_url(&params))
}
