//! Shared in-memory source for integration tests.

use async_trait::async_trait;
use repolint::{
    CheckerRegistry, ContentCache, Dispatcher, FileTree, RepositoryDescriptor, RepositoryPage,
    RepositorySource, SourceError, TreeCollector,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Checkers that shell out to external tools.
#[allow(dead_code)]
pub const EXTERNAL_CHECKERS: [&str; 2] = ["misspell", "broken-link"];

/// One account with a single page of repositories, counting every content fetch.
#[derive(Default)]
pub struct CountingSource {
    repositories: Vec<RepositoryDescriptor>,
    trees: HashMap<String, Vec<String>>,
    files: HashMap<(String, String), String>,
    fetches: Mutex<Vec<(String, String)>>,
}

#[allow(dead_code)]
impl CountingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository(mut self, repository: RepositoryDescriptor, paths: &[&str]) -> Self {
        self.trees.insert(
            repository.full_name.clone(),
            paths.iter().map(ToString::to_string).collect(),
        );
        self.repositories.push(repository);
        self
    }

    pub fn file(mut self, repository: &str, path: &str, contents: &str) -> Self {
        self.files.insert(
            (repository.to_string(), path.to_string()),
            contents.to_string(),
        );
        self
    }

    /// Number of fetches of `path` in `repository`.
    pub fn fetches(&self, repository: &str, path: &str) -> usize {
        self.fetches
            .lock()
            .unwrap()
            .iter()
            .filter(|(repo, p)| repo == repository && p == path)
            .count()
    }

    pub fn fetched_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .fetches
            .lock()
            .unwrap()
            .iter()
            .map(|(_, path)| path.clone())
            .collect();
        paths.sort();
        paths
    }
}

#[async_trait]
impl RepositorySource for CountingSource {
    async fn list_repositories(
        &self,
        _account: &str,
        page: u32,
        _per_page: u8,
    ) -> Result<RepositoryPage, SourceError> {
        let repositories = if page == 1 {
            self.repositories.clone()
        } else {
            Vec::new()
        };
        Ok(RepositoryPage {
            repositories,
            next_page: None,
        })
    }

    async fn file_tree(&self, repository: &RepositoryDescriptor) -> Result<FileTree, SourceError> {
        self.trees
            .get(&repository.full_name)
            .map(|paths| FileTree {
                paths: paths.clone(),
                truncated: false,
            })
            .ok_or_else(|| SourceError::Status {
                status: 404,
                message: "Not Found".to_string(),
            })
    }

    async fn file_content(
        &self,
        repository: &RepositoryDescriptor,
        path: &str,
    ) -> Result<Vec<u8>, SourceError> {
        self.fetches
            .lock()
            .unwrap()
            .push((repository.full_name.clone(), path.to_string()));
        self.files
            .get(&(repository.full_name.clone(), path.to_string()))
            .map(|contents| contents.clone().into_bytes())
            .ok_or_else(|| SourceError::Status {
                status: 404,
                message: "Not Found".to_string(),
            })
    }
}

/// Dispatcher with every built-in checker except `disabled`.
#[allow(dead_code)]
pub fn dispatcher(disabled: &[&str]) -> Dispatcher {
    let mut registry = CheckerRegistry::with_defaults(Duration::from_secs(10)).unwrap();
    registry.disable(disabled).unwrap();
    Dispatcher::new(
        registry,
        TreeCollector::new(true).unwrap(),
        ContentCache::new(4, Duration::from_secs(10)).unwrap(),
    )
}
