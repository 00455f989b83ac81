//! External text-scanning tools.
//!
//! Running a tool and making sense of its output are kept apart: [`run_tool`]
//! only captures text, the parsers turn that text into typed records, and the
//! checkers decide which records become warnings.

mod error;
mod liche;
mod misspell;
mod translate;

pub use error::ToolError;
pub use liche::{parse_liche_output, LinkFailure};
pub use misspell::{MisspellFinding, MisspellParser};
pub use translate::PathTranslator;

use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Runs `program` with `args` and returns its combined stdout and stderr.
///
/// A non-zero exit status is not an error: these tools report findings that
/// way. The child is killed if it outlives `timeout`.
///
/// # Errors
///
/// Returns [`ToolError`] if the program cannot be started or times out.
pub async fn run_tool(
    program: &str,
    args: &[String],
    timeout: Duration,
) -> Result<String, ToolError> {
    debug!(program, files = args.len(), "Running external tool");

    let mut command = Command::new(program);
    command
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = tokio::time::timeout(timeout, command.output())
        .await
        .map_err(|_| ToolError::Timeout {
            program: program.to_string(),
            timeout_secs: timeout.as_secs(),
        })?
        .map_err(|source| ToolError::Spawn {
            program: program.to_string(),
            source,
        })?;

    debug!(program, status = %output.status, "External tool finished");
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok(text)
}
