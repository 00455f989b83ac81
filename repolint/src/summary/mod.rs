//! Scan results: warnings, per-repository reports and the run summary.

mod report;
mod run_summary;
mod warning;

pub use report::RepositoryReport;
pub use run_summary::RunSummary;
pub use warning::Warning;
