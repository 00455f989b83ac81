//! Per-repository scan report.

use super::Warning;

/// Outcome of scanning one repository.
#[derive(Debug, Clone, Default)]
pub struct RepositoryReport {
    /// Repository full name (`owner/name`).
    pub repository: String,
    /// Number of files in the collected tree.
    pub files: usize,
    /// Number of files whose content was fetched.
    pub materialized: usize,
    /// Whether the file tree could not be retrieved.
    pub tree_failed: bool,
    /// Warnings grouped by checker in registration order.
    pub warnings: Vec<Warning>,
}
