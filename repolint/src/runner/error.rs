//! Runner error types.

/// Errors that abort a scan run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Settings loading and validation errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The repository listing could not be started.
    #[error(transparent)]
    Catalog(#[from] crate::catalog::CatalogError),

    /// Checker registry setup errors.
    #[error(transparent)]
    Registry(#[from] crate::checkers::RegistryError),

    /// A built-in pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] regex::Error),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// The scratch directory could not be created.
    #[error("Failed to create scratch directory: {0}")]
    Scratch(#[source] std::io::Error),
}
