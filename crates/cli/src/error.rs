//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map diagnostic error blocks to the operation-error exit code.
//!
//! Does NOT handle:
//! - Error message formatting (operation errors are printed as returned, config
//!   errors through their Display impls).
//!
//! Invariants:
//! - Operation faults never carry HTTP status detail into the exit code; the
//!   diagnostics layer has already flattened them into error text.

use opensearch_diag::TextBlock;

/// Structured exit codes for osdoctor.
///
/// These codes let scripts separate "the cluster reported a problem" from
/// "the tool was not usable at all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed and every block was a normal result.
    Success = 0,

    /// Operation error - the command ran but a diagnostic came back as an
    /// error block (unreachable cluster, bad index name, malformed body).
    OperationError = 1,

    /// Configuration error - missing endpoint or credentials, invalid
    /// timeout, unreadable `.env` file. The command never ran.
    ConfigError = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Fold a command's output block into an exit code.
    pub fn from_block(block: &TextBlock) -> Self {
        if block.is_error() {
            ExitCode::OperationError
        } else {
            ExitCode::Success
        }
    }
}
