//! Repository descriptor.

use chrono::{DateTime, Utc};

/// One inspectable repository of the scanned account.
#[derive(Debug, Clone)]
pub struct RepositoryDescriptor {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Default branch name (e.g., "main").
    pub default_branch: String,

    /// Whether the repository is a fork.
    pub fork: bool,

    /// Whether the repository is archived.
    pub archived: bool,

    /// Stargazer count.
    pub stars: u32,

    /// Time of the last push, if upstream reported one.
    pub pushed_at: Option<DateTime<Utc>>,
}

impl RepositoryDescriptor {
    /// Creates a descriptor for an active, non-fork repository on `main`.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        let owner = owner.into();
        let name = name.into();
        Self {
            full_name: format!("{owner}/{name}"),
            owner,
            name,
            default_branch: "main".to_string(),
            fork: false,
            archived: false,
            stars: 0,
            pushed_at: Some(Utc::now()),
        }
    }
}
