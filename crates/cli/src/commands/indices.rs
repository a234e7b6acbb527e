//! Index commands: listing, mappings, and ad-hoc searches.

use opensearch_client::OpenSearchClient;
use opensearch_diag::{Diagnostics, TextBlock};

use crate::commands::emit;
use crate::error::ExitCode;

/// Print the index listing as pretty JSON.
pub async fn list(diag: &Diagnostics<OpenSearchClient>) -> ExitCode {
    emit(&diag.list_indices().await)
}

/// Print the field mapping of one index.
pub async fn mapping(diag: &Diagnostics<OpenSearchClient>, index: &str) -> ExitCode {
    emit(&diag.index_mapping(index).await)
}

/// Run a query DSL search and print the raw response.
///
/// The body arrives as a shell argument; it is parsed here so a typo turns
/// into an error block instead of a request the cluster will reject.
pub async fn search(diag: &Diagnostics<OpenSearchClient>, index: &str, body: &str) -> ExitCode {
    let body: serde_json::Value = match serde_json::from_str(body) {
        Ok(body) => body,
        Err(e) => {
            return emit(&TextBlock::error(format!(
                "search body is not valid JSON: {e}"
            )));
        }
    };

    emit(&diag.search_documents(index, &body).await)
}
