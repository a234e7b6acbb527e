//! CLI command implementations.

pub mod admin;
pub mod cluster;
pub mod completions;
pub mod dashboards;
pub mod indices;

use opensearch_diag::TextBlock;

use crate::error::ExitCode;

/// Print a diagnostic block to stdout and fold it into an exit code.
///
/// Error blocks are printed on stdout too: they are the operation's result
/// text, not process-level failures, and scripts pick them up through the
/// exit code.
pub(crate) fn emit(block: &TextBlock) -> ExitCode {
    println!("{}", block.text);
    ExitCode::from_block(block)
}
