//! [`RepositorySource`] backed by the GitHub REST API.

use super::{FileTree, RepositoryPage, RepositorySource, SourceError};
use crate::catalog::RepositoryDescriptor;
use crate::rate_limit::{ensure_core_budget, ensure_core_rate_limit};
use async_trait::async_trait;
use octocrab::models::Repository;
use octocrab::{Octocrab, Page};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Query parameters for `GET /users/{account}/repos`.
#[derive(Debug, Serialize)]
struct ListParams {
    per_page: u8,
    page: u32,
}

/// Response of `GET /repos/{owner}/{repo}/git/trees/{sha}`.
#[derive(Debug, Deserialize)]
struct TreeResponse {
    tree: Vec<TreeEntry>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Deserialize)]
struct TreeEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

/// GitHub-backed repository source.
#[derive(Debug, Clone)]
pub struct GitHubSource {
    octocrab: Octocrab,
}

impl GitHubSource {
    /// Wraps an authenticated GitHub client.
    pub fn new(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }
}

#[async_trait]
impl RepositorySource for GitHubSource {
    async fn list_repositories(
        &self,
        account: &str,
        page: u32,
        per_page: u8,
    ) -> Result<RepositoryPage, SourceError> {
        ensure_core_rate_limit(&self.octocrab).await?;

        let route = format!("/users/{account}/repos");
        let params = ListParams { per_page, page };
        let listing: Page<Repository> = self.octocrab.get(route, Some(&params)).await?;
        debug!(account, page, count = listing.items.len(), "Fetched repository page");

        let next_page = listing.next.is_some().then_some(page + 1);
        let repositories = listing
            .items
            .into_iter()
            .map(|repo| to_descriptor(account, repo))
            .collect();

        Ok(RepositoryPage {
            repositories,
            next_page,
        })
    }

    async fn file_tree(&self, repository: &RepositoryDescriptor) -> Result<FileTree, SourceError> {
        ensure_core_rate_limit(&self.octocrab).await?;

        let route = format!(
            "/repos/{}/{}/git/trees/{}",
            repository.owner, repository.name, repository.default_branch
        );
        let response: TreeResponse = self
            .octocrab
            .get(route, Some(&[("recursive", "1")]))
            .await?;

        let paths = response
            .tree
            .into_iter()
            .filter(|entry| entry.kind == "blob")
            .map(|entry| entry.path)
            .collect();

        Ok(FileTree {
            paths,
            truncated: response.truncated,
        })
    }

    async fn file_content(
        &self,
        repository: &RepositoryDescriptor,
        path: &str,
    ) -> Result<Vec<u8>, SourceError> {
        let items = self
            .octocrab
            .repos(&repository.owner, &repository.name)
            .get_content()
            .path(path)
            .r#ref(&repository.default_branch)
            .send()
            .await?;

        items
            .items
            .into_iter()
            .next()
            .and_then(|content| content.decoded_content())
            .map(String::into_bytes)
            .ok_or_else(|| SourceError::NoContent {
                path: path.to_string(),
            })
    }

    async fn reserve_requests(&self, requests: usize) -> Result<(), SourceError> {
        let needed = u32::try_from(requests).unwrap_or(u32::MAX);
        ensure_core_budget(&self.octocrab, needed).await?;
        Ok(())
    }
}

/// Converts an API repository model into a descriptor.
fn to_descriptor(account: &str, repo: Repository) -> RepositoryDescriptor {
    let owner = repo
        .owner
        .map(|owner| owner.login)
        .unwrap_or_else(|| account.to_string());
    let full_name = repo
        .full_name
        .unwrap_or_else(|| format!("{}/{}", owner, repo.name));

    RepositoryDescriptor {
        owner,
        full_name,
        name: repo.name,
        default_branch: repo.default_branch.unwrap_or_else(|| "main".to_string()),
        fork: repo.fork.unwrap_or(false),
        archived: repo.archived.unwrap_or(false),
        stars: repo.stargazers_count.unwrap_or(0),
        pushed_at: repo.pushed_at,
    }
}
