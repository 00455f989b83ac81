#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod cache;
pub mod catalog;
pub mod checkers;
pub mod config;
pub mod dispatcher;
pub mod files;
pub mod rate_limit;
pub mod runner;
pub mod session;
pub mod source;
pub mod summary;
pub mod tools;
pub mod tree;

#[cfg(test)]
mod testing;

pub use cache::ContentCache;
pub use catalog::{
    fetch_catalog, CatalogError, CatalogFilter, RepositoryDescriptor, SkipReason,
};
pub use checkers::{parse_checker_list, Checker, CheckerRegistry, RegistryError};
pub use config::{ConfigError, ScanSettings};
pub use dispatcher::{Dispatcher, ScanPhase};
pub use files::{FileDescriptor, FileId, FileSet, Requirements};
pub use rate_limit::{check_core_rate_limit, ensure_core_rate_limit, wait_if_needed, RateLimitInfo};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use session::Session;
pub use source::{FileTree, GitHubSource, RepositoryPage, RepositorySource, SourceError};
pub use summary::{RepositoryReport, RunSummary, Warning};
pub use tree::TreeCollector;
