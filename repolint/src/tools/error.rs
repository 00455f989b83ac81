//! External tool error types.

use thiserror::Error;

/// Errors from running an external tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The program could not be started.
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program did not finish in time.
    #[error("'{program}' timed out after {timeout_secs} seconds")]
    Timeout { program: String, timeout_secs: u64 },
}
