//! Source error types.

use thiserror::Error;

/// Errors returned by a [`RepositorySource`](super::RepositorySource).
#[derive(Debug, Error)]
pub enum SourceError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// Upstream answered with an error status.
    #[error("upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request did not finish in time.
    #[error("request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// The file exists but has no retrievable text content.
    #[error("no retrievable content for '{path}'")]
    NoContent { path: String },
}

impl SourceError {
    /// Returns the upstream HTTP status, when known.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::GitHubError(octocrab::Error::GitHub { source, .. }) => {
                Some(source.status_code.as_u16())
            }
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
