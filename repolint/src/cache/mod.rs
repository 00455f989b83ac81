//! Lazy content materialization.
//!
//! Checkers only declare what they need while files are pushed. The cache then
//! fetches each flagged file exactly once, however many checkers flagged it,
//! and never touches files nobody asked for. Fetched bytes land in a scratch
//! directory (for checkers that shell out to external tools) and, when asked,
//! are kept in memory as text.

mod scratch;

use crate::catalog::RepositoryDescriptor;
use crate::files::{FileDescriptor, FileSet};
use crate::session::Session;
use crate::source::{RepositorySource, SourceError};
use futures::stream::{self, StreamExt};
use scratch::escape_path;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;
use tracing::{debug, warn};

/// Fetches and stores file content on demand.
///
/// The scratch directory lives as long as the cache and is removed on drop.
#[derive(Debug)]
pub struct ContentCache {
    scratch: TempDir,
    concurrency: usize,
    fetch_timeout: Duration,
}

impl ContentCache {
    /// Creates a cache with a fresh scratch directory.
    ///
    /// # Arguments
    ///
    /// * `concurrency` - Maximum concurrent content fetches
    /// * `fetch_timeout` - Time limit for a single fetch
    ///
    /// # Errors
    ///
    /// Returns an error if the scratch directory cannot be created.
    pub fn new(concurrency: usize, fetch_timeout: Duration) -> std::io::Result<Self> {
        let scratch = tempfile::Builder::new().prefix("repolint").tempdir()?;
        debug!(path = %scratch.path().display(), "Created scratch directory");
        Ok(Self {
            scratch,
            concurrency: concurrency.max(1),
            fetch_timeout,
        })
    }

    /// Root of the scratch directory.
    pub fn scratch_path(&self) -> &Path {
        self.scratch.path()
    }

    /// Scratch subdirectory holding one repository's copies.
    pub fn repository_dir(&self, repository: &RepositoryDescriptor) -> PathBuf {
        self.scratch.path().join(escape_path(&repository.full_name))
    }

    /// Materializes every file of `files` that some checker flagged.
    ///
    /// Fetches run concurrently, each task owning one descriptor.
    ///
    /// # Returns
    ///
    /// The number of files fetched.
    pub async fn resolve_all(
        &self,
        source: &dyn RepositorySource,
        session: &Session,
        repository: &RepositoryDescriptor,
        files: &mut FileSet,
    ) -> usize {
        let pending: Vec<&mut FileDescriptor> = files
            .iter_mut()
            .filter(|file| file.needs_materialization())
            .collect();
        if pending.is_empty() {
            return 0;
        }

        if let Err(e) = source.reserve_requests(pending.len()).await {
            warn!(
                repo = %repository.full_name,
                files = pending.len(),
                error = %e,
                "Failed to check request quota, fetching anyway"
            );
        }

        let dir = self.repository_dir(repository);
        if let Err(e) = tokio::fs::create_dir_all(&dir).await {
            warn!(repo = %repository.full_name, error = %e, "Failed to create scratch directory");
        }

        let fetched: Vec<bool> = stream::iter(pending)
            .map(|file| self.materialize(source, session, repository, &dir, file))
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        fetched.into_iter().filter(|fetched| *fetched).count()
    }

    /// Materializes a single file if it is flagged and not fetched yet.
    ///
    /// # Returns
    ///
    /// `true` if a fetch was made.
    pub async fn resolve(
        &self,
        source: &dyn RepositorySource,
        session: &Session,
        repository: &RepositoryDescriptor,
        file: &mut FileDescriptor,
    ) -> bool {
        let dir = self.repository_dir(repository);
        if let Err(e) = tokio::fs::create_dir_all(&dir).await {
            warn!(repo = %repository.full_name, error = %e, "Failed to create scratch directory");
        }
        self.materialize(source, session, repository, &dir, file)
            .await
    }

    /// Removes a repository's scratch copies once its scan is over.
    pub async fn release(&self, repository: &RepositoryDescriptor) {
        let dir = self.repository_dir(repository);
        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "Failed to remove scratch files");
            }
        }
    }

    async fn materialize(
        &self,
        source: &dyn RepositorySource,
        session: &Session,
        repository: &RepositoryDescriptor,
        dir: &Path,
        file: &mut FileDescriptor,
    ) -> bool {
        file.normalize_requirements();
        let requirements = file.requirements();
        if !requirements.needs_local_copy() || file.is_materialized() {
            return false;
        }

        let data = match self
            .fetch(source, session, repository, file.original_path())
            .await
        {
            Ok(data) => data,
            Err(e) => {
                warn!(
                    repo = %repository.full_name,
                    path = %file.original_path(),
                    error = %e,
                    "Failed to fetch file, treating it as empty"
                );
                Vec::new()
            }
        };

        let target = dir.join(escape_path(file.original_path()));
        let local_path = match tokio::fs::write(&target, &data).await {
            Ok(()) => Some(target),
            Err(e) => {
                warn!(
                    repo = %repository.full_name,
                    path = %file.original_path(),
                    error = %e,
                    "Failed to write scratch copy"
                );
                None
            }
        };

        let contents = requirements
            .needs_contents()
            .then(|| String::from_utf8_lossy(&data).into_owned());
        file.set_materialized(local_path, contents);
        true
    }

    async fn fetch(
        &self,
        source: &dyn RepositorySource,
        session: &Session,
        repository: &RepositoryDescriptor,
        path: &str,
    ) -> Result<Vec<u8>, SourceError> {
        session.record_request();
        debug!(repo = %repository.full_name, path, "Fetching file");
        tokio::time::timeout(self.fetch_timeout, source.file_content(repository, path))
            .await
            .map_err(|_| SourceError::Timeout {
                timeout_secs: self.fetch_timeout.as_secs(),
            })?
    }
}
