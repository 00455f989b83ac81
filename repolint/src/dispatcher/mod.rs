//! Per-repository scan orchestration.
//!
//! A scan walks the phases of [`ScanPhase`] in order: the file tree is
//! collected, every file is offered to every checker, flagged content is
//! materialized, and only then do the checkers run.

use crate::cache::ContentCache;
use crate::catalog::RepositoryDescriptor;
use crate::checkers::CheckerRegistry;
use crate::files::FileSet;
use crate::session::Session;
use crate::source::RepositorySource;
use crate::summary::{RepositoryReport, Warning};
use crate::tree::TreeCollector;
use std::fmt;
use tracing::{debug, error, info, info_span, Instrument};

/// Host prefix of warning lines.
pub const DEFAULT_HOST: &str = "github.com";

/// Where a repository scan currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    FilesCollected,
    RequirementsDeclared,
    RequirementsResolved,
    Checked,
    Reported,
}

impl fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::FilesCollected => "files-collected",
            Self::RequirementsDeclared => "requirements-declared",
            Self::RequirementsResolved => "requirements-resolved",
            Self::Checked => "checked",
            Self::Reported => "reported",
        };
        f.write_str(name)
    }
}

/// Drives one repository at a time through the checkers.
pub struct Dispatcher {
    registry: CheckerRegistry,
    collector: TreeCollector,
    cache: ContentCache,
    host: String,
    phase: ScanPhase,
}

impl Dispatcher {
    /// Creates a dispatcher reporting warnings under [`DEFAULT_HOST`].
    pub fn new(registry: CheckerRegistry, collector: TreeCollector, cache: ContentCache) -> Self {
        Self {
            registry,
            collector,
            cache,
            host: DEFAULT_HOST.to_string(),
            phase: ScanPhase::Idle,
        }
    }

    /// Uses another host prefix in warning lines.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// The enabled checkers.
    pub fn registry(&self) -> &CheckerRegistry {
        &self.registry
    }

    /// Current phase; `Idle` between scans.
    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    fn enter(&mut self, phase: ScanPhase, repository: &RepositoryDescriptor) {
        debug!(repo = %repository.full_name, from = %self.phase, to = %phase, "Scan phase");
        self.phase = phase;
    }

    /// Scans one repository and returns its report.
    ///
    /// Failures below the repository level are logged and never abort the
    /// scan: an unavailable tree yields an empty file set, so only checks
    /// that need no files can warn.
    pub async fn scan(
        &mut self,
        source: &dyn RepositorySource,
        session: &Session,
        repository: &RepositoryDescriptor,
    ) -> RepositoryReport {
        let span = info_span!("scan", repo = %repository.full_name);
        self.scan_inner(source, session, repository)
            .instrument(span)
            .await
    }

    async fn scan_inner(
        &mut self,
        source: &dyn RepositorySource,
        session: &Session,
        repository: &RepositoryDescriptor,
    ) -> RepositoryReport {
        info!(repo = %repository.full_name, "Scanning repository");

        let collected = self.collector.collect(source, session, repository).await;
        let (mut files, tree_failed) = match collected {
            Ok(files) => (files, false),
            Err(e) => {
                error!(repo = %repository.full_name, error = %e, "Failed to fetch file tree");
                (FileSet::default(), true)
            }
        };
        self.enter(ScanPhase::FilesCollected, repository);

        self.registry.reset_all(repository);
        for (id, file) in files.entries_mut() {
            self.registry.push_file(id, file);
        }
        self.enter(ScanPhase::RequirementsDeclared, repository);

        let fetched = self
            .cache
            .resolve_all(source, session, repository, &mut files)
            .await;
        self.enter(ScanPhase::RequirementsResolved, repository);

        let results = self.registry.check_all(&files).await;
        self.enter(ScanPhase::Checked, repository);

        let label = format!("{}/{}", self.host, repository.full_name);
        let warnings: Vec<Warning> = results
            .into_iter()
            .flat_map(|(checker, messages)| {
                let label = label.clone();
                messages.into_iter().map(move |message| Warning {
                    repository: label.clone(),
                    checker,
                    message,
                })
            })
            .collect();
        self.enter(ScanPhase::Reported, repository);

        self.cache.release(repository).await;
        info!(
            repo = %repository.full_name,
            files = files.len(),
            fetched,
            warnings = warnings.len(),
            "Finished repository"
        );
        self.enter(ScanPhase::Idle, repository);

        RepositoryReport {
            repository: repository.full_name.clone(),
            files: files.len(),
            materialized: files.materialized_count(),
            tree_failed,
            warnings,
        }
    }
}
