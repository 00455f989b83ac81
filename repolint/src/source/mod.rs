//! Boundary to the code-hosting service.
//!
//! Everything the pipeline needs from upstream goes through [`RepositorySource`],
//! so the catalog, tree collector and content cache can be exercised against an
//! in-memory source in tests.

mod error;
mod github;

pub use error::SourceError;
pub use github::GitHubSource;

use crate::catalog::RepositoryDescriptor;
use async_trait::async_trait;

/// One page of an account's repository listing.
#[derive(Debug, Clone, Default)]
pub struct RepositoryPage {
    /// Repositories on this page, in upstream order.
    pub repositories: Vec<RepositoryDescriptor>,

    /// Page number to request next, or `None` on the last page.
    pub next_page: Option<u32>,
}

/// Flattened file listing of a repository's default branch.
#[derive(Debug, Clone, Default)]
pub struct FileTree {
    /// Paths of every file (blob) in the tree.
    pub paths: Vec<String>,

    /// Set when upstream cut the listing short.
    pub truncated: bool,
}

/// Read-only access to an account's repositories.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Lists one page of the account's repositories. Pages start at 1.
    async fn list_repositories(
        &self,
        account: &str,
        page: u32,
        per_page: u8,
    ) -> Result<RepositoryPage, SourceError>;

    /// Returns the recursive file tree of the repository's default branch.
    async fn file_tree(&self, repository: &RepositoryDescriptor) -> Result<FileTree, SourceError>;

    /// Returns the raw content of one file on the default branch.
    async fn file_content(
        &self,
        repository: &RepositoryDescriptor,
        path: &str,
    ) -> Result<Vec<u8>, SourceError>;

    /// Waits until `requests` more calls fit in the upstream quota.
    ///
    /// Sources without a quota have nothing to wait for.
    async fn reserve_requests(&self, _requests: usize) -> Result<(), SourceError> {
        Ok(())
    }
}
