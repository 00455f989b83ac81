//! Run summary types.

use super::RepositoryReport;

/// Summary of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Repositories listed by the catalog, kept or not.
    pub repositories_listed: usize,

    /// Repositories left out by the catalog filter.
    pub repositories_skipped: usize,

    /// Repositories that went through the checkers.
    pub repositories_scanned: usize,

    /// Repositories whose file tree could not be retrieved.
    pub tree_failures: usize,

    /// Files whose content was fetched.
    pub files_materialized: usize,

    /// Warnings emitted.
    pub warnings: usize,

    /// Upstream requests issued.
    pub requests: u64,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with one repository report.
    pub fn record_report(&mut self, report: &RepositoryReport) {
        self.repositories_scanned += 1;
        if report.tree_failed {
            self.tree_failures += 1;
        }
        self.files_materialized += report.materialized;
        self.warnings += report.warnings.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::Warning;

    #[test]
    fn can_record_report() {
        let mut summary = RunSummary::new();

        summary.record_report(&RepositoryReport {
            repository: "octo/hello".to_string(),
            files: 4,
            materialized: 2,
            tree_failed: false,
            warnings: vec![Warning {
                repository: "github.com/octo/hello".to_string(),
                checker: "acronym",
                message: "README.md:1: replace sql with SQL".to_string(),
            }],
        });
        summary.record_report(&RepositoryReport {
            repository: "octo/empty".to_string(),
            tree_failed: true,
            ..Default::default()
        });

        assert_eq!(summary.repositories_scanned, 2);
        assert_eq!(summary.tree_failures, 1);
        assert_eq!(summary.files_materialized, 2);
        assert_eq!(summary.warnings, 1);
    }
}
