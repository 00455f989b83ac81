//! In-memory repository source for unit tests.

use crate::catalog::RepositoryDescriptor;
use crate::source::{FileTree, RepositoryPage, RepositorySource, SourceError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// One listing page served by [`MemorySource`].
pub(crate) enum PageFixture {
    Repositories(Vec<RepositoryDescriptor>),
    Status(u16),
}

/// Serves fixed pages, trees and files, counting content fetches per path.
#[derive(Default)]
pub(crate) struct MemorySource {
    pages: Vec<PageFixture>,
    trees: HashMap<String, FileTree>,
    files: HashMap<String, String>,
    content_delay: Option<Duration>,
    fetches: Mutex<HashMap<String, usize>>,
    reservations: Mutex<Vec<usize>>,
}

impl MemorySource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_page(mut self, page: PageFixture) -> Self {
        self.pages.push(page);
        self
    }

    pub(crate) fn with_tree(mut self, repository: &str, paths: &[&str], truncated: bool) -> Self {
        self.trees.insert(
            repository.to_string(),
            FileTree {
                paths: paths.iter().map(ToString::to_string).collect(),
                truncated,
            },
        );
        self
    }

    pub(crate) fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(path.to_string(), contents.to_string());
        self
    }

    /// Makes every content fetch take `delay` before answering.
    pub(crate) fn with_content_delay(mut self, delay: Duration) -> Self {
        self.content_delay = Some(delay);
        self
    }

    pub(crate) fn reservations(&self) -> Vec<usize> {
        self.reservations.lock().unwrap().clone()
    }

    pub(crate) fn fetches(&self, path: &str) -> usize {
        self.fetches
            .lock()
            .unwrap()
            .get(path)
            .copied()
            .unwrap_or_default()
    }

    pub(crate) fn total_fetches(&self) -> usize {
        self.fetches.lock().unwrap().values().sum()
    }
}

fn not_found(message: &str) -> SourceError {
    SourceError::Status {
        status: 404,
        message: message.to_string(),
    }
}

#[async_trait]
impl RepositorySource for MemorySource {
    async fn list_repositories(
        &self,
        _account: &str,
        page: u32,
        _per_page: u8,
    ) -> Result<RepositoryPage, SourceError> {
        let index = page as usize - 1;
        let next_page = (index + 1 < self.pages.len()).then_some(page + 1);
        match self.pages.get(index) {
            Some(PageFixture::Repositories(repositories)) => Ok(RepositoryPage {
                repositories: repositories.clone(),
                next_page,
            }),
            Some(PageFixture::Status(status)) => Err(SourceError::Status {
                status: *status,
                message: "listing failed".to_string(),
            }),
            None => Ok(RepositoryPage::default()),
        }
    }

    async fn file_tree(&self, repository: &RepositoryDescriptor) -> Result<FileTree, SourceError> {
        self.trees
            .get(&repository.name)
            .cloned()
            .ok_or_else(|| not_found("tree not found"))
    }

    async fn file_content(
        &self,
        _repository: &RepositoryDescriptor,
        path: &str,
    ) -> Result<Vec<u8>, SourceError> {
        *self
            .fetches
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default() += 1;
        if let Some(delay) = self.content_delay {
            tokio::time::sleep(delay).await;
        }
        self.files
            .get(path)
            .map(|contents| contents.clone().into_bytes())
            .ok_or_else(|| not_found("file not found"))
    }

    async fn reserve_requests(&self, requests: usize) -> Result<(), SourceError> {
        self.reservations.lock().unwrap().push(requests);
        Ok(())
    }
}

/// Resets `checker` and pushes every file of `files` to it.
pub(crate) fn push_all(
    checker: &mut dyn crate::checkers::Checker,
    files: &mut crate::files::FileSet,
) {
    checker.reset(&RepositoryDescriptor::new("octo", "hello"));
    for (id, file) in files.entries_mut() {
        checker.push_file(id, file);
    }
}

/// Marks `path` as materialized with the given text.
pub(crate) fn materialize(files: &mut crate::files::FileSet, path: &str, contents: &str) {
    for file in files.iter_mut() {
        if file.original_path() == path {
            file.set_materialized(None, Some(contents.to_string()));
        }
    }
}
