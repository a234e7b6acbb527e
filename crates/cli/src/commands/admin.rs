//! Administrative listing commands: ISM policies and index templates.

use opensearch_client::OpenSearchClient;
use opensearch_diag::Diagnostics;

use crate::commands::emit;
use crate::error::ExitCode;

/// Print Index State Management policies as pretty JSON.
pub async fn ism_policies(diag: &Diagnostics<OpenSearchClient>) -> ExitCode {
    emit(&diag.ism_policies().await)
}

/// Print composable index templates as pretty JSON.
pub async fn templates(diag: &Diagnostics<OpenSearchClient>) -> ExitCode {
    emit(&diag.index_templates().await)
}
