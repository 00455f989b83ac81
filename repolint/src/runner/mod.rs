//! Orchestrates a full account scan.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::cache::ContentCache;
use crate::catalog::fetch_catalog;
use crate::checkers::CheckerRegistry;
use crate::dispatcher::Dispatcher;
use crate::session::Session;
use crate::source::{GitHubSource, RepositorySource};
use crate::summary::RunSummary;
use crate::tree::TreeCollector;
use futures::TryStreamExt;
use octocrab::Octocrab;
use std::pin::pin;
use std::sync::Arc;
use tracing::info;

/// Scans every selected repository of one account.
pub struct Runner {
    config: RunnerConfig,
    source: Arc<dyn RepositorySource>,
    registry: CheckerRegistry,
}

impl Runner {
    /// Builds a runner talking to GitHub.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the settings are invalid or the client
    /// cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let octocrab = build_client(config.token())?;
        Self::with_source(config, Arc::new(GitHubSource::new(octocrab)))
    }

    /// Builds a runner over any repository source.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the settings are invalid.
    pub fn with_source(
        config: RunnerConfig,
        source: Arc<dyn RepositorySource>,
    ) -> Result<Self, RunnerError> {
        let settings = config.settings();
        let mut registry = CheckerRegistry::with_defaults(settings.tool_timeout())?;
        settings.validate(config.settings_origin(), &registry.names())?;
        registry.disable(settings.disabled_checkers.as_slice())?;
        Ok(Self {
            config,
            source,
            registry,
        })
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Streams the catalog and scans repositories one after another.
    ///
    /// Warning lines go to stdout as each repository finishes.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] on setup failures or when the listing fails
    /// before any repository could be returned.
    pub async fn run(self) -> Result<RunSummary, RunnerError> {
        let Self {
            config,
            source,
            registry,
        } = self;
        let settings = config.settings();
        let session = Session::new();
        let mut summary = RunSummary::new();
        info!(checkers = ?registry.names(), "Enabled checkers");

        let collector = TreeCollector::new(settings.skip_vendor)?;
        let cache = ContentCache::new(settings.concurrency, settings.fetch_timeout())
            .map_err(RunnerError::Scratch)?;
        let mut dispatcher =
            Dispatcher::new(registry, collector, cache).with_host(config.host());

        let filter = settings.catalog_filter();
        let mut catalog = pin!(fetch_catalog(
            source.as_ref(),
            &session,
            config.account(),
            settings.per_page,
            &filter,
        ));

        while let Some(repository) = catalog.try_next().await? {
            let report = dispatcher
                .scan(source.as_ref(), &session, &repository)
                .await;
            for warning in &report.warnings {
                println!("{warning}");
            }
            summary.record_report(&report);
        }

        summary.repositories_skipped = usize::try_from(session.skipped()).unwrap_or(usize::MAX);
        summary.repositories_listed = summary.repositories_scanned + summary.repositories_skipped;
        summary.requests = session.requests();
        info!(
            account = config.account(),
            scanned = summary.repositories_scanned,
            warnings = summary.warnings,
            "Scan complete"
        );
        Ok(summary)
    }
}

/// Builds the GitHub client; an empty token means unauthenticated requests.
fn build_client(token: &str) -> Result<Octocrab, octocrab::Error> {
    let builder = Octocrab::builder();
    if token.is_empty() {
        builder.build()
    } else {
        builder.personal_token(token.to_string()).build()
    }
}
