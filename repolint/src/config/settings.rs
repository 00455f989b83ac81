//! Scan settings deserialization and validation.

use crate::catalog::CatalogFilter;
use crate::config::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Tunables of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ScanSettings {
    /// Minimum stargazer count.
    pub min_stars: u32,

    /// Skip forked repositories.
    pub skip_forks: bool,

    /// Skip archived repositories.
    pub skip_archived: bool,

    /// Skip repositories without recent pushes.
    pub skip_inactive: bool,

    /// Inactivity threshold in months.
    pub inactive_months: u32,

    /// Leave vendored paths out of the file tree.
    pub skip_vendor: bool,

    /// Checkers to turn off, by name.
    pub disabled_checkers: Vec<String>,

    /// Repositories per listing page (1 to 100).
    pub per_page: u8,

    /// Maximum concurrent content fetches within a repository.
    pub concurrency: usize,

    /// Timeout of a single content fetch, in seconds.
    pub fetch_timeout_secs: u64,

    /// Timeout of a single external tool run, in seconds.
    pub tool_timeout_secs: u64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            min_stars: 0,
            skip_forks: true,
            skip_archived: true,
            skip_inactive: false,
            inactive_months: 6,
            skip_vendor: true,
            disabled_checkers: Vec::new(),
            per_page: 100,
            concurrency: 5,
            fetch_timeout_secs: 30,
            tool_timeout_secs: 300,
        }
    }
}

impl ScanSettings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, or not
    /// valid settings TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading scan settings");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Checks value ranges and that every disabled checker exists.
    ///
    /// `origin` names where the settings came from, for error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for the first bad value.
    pub fn validate(&self, origin: &str, known_checkers: &[&str]) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: origin.to_string(),
            message,
        };

        if !(1..=100).contains(&self.per_page) {
            return Err(invalid(format!(
                "per-page must be between 1 and 100, got {}",
                self.per_page
            )));
        }
        if self.inactive_months == 0 {
            return Err(invalid("inactive-months must be greater than 0".to_string()));
        }
        if self.concurrency == 0 {
            return Err(invalid("concurrency must be greater than 0".to_string()));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(invalid("fetch-timeout-secs must be greater than 0".to_string()));
        }
        if self.tool_timeout_secs == 0 {
            return Err(invalid("tool-timeout-secs must be greater than 0".to_string()));
        }
        if let Some(unknown) = self
            .disabled_checkers
            .iter()
            .find(|name| !known_checkers.contains(&name.as_str()))
        {
            return Err(invalid(format!(
                "unknown checker '{unknown}' (known checkers: {})",
                known_checkers.join(", ")
            )));
        }

        Ok(())
    }

    /// Repository selection rules derived from these settings.
    #[must_use]
    pub fn catalog_filter(&self) -> CatalogFilter {
        CatalogFilter {
            skip_forks: self.skip_forks,
            skip_archived: self.skip_archived,
            min_stars: self.min_stars,
            skip_inactive: self.skip_inactive,
            inactive_months: self.inactive_months,
        }
    }

    /// Content fetch timeout.
    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// External tool timeout.
    #[must_use]
    pub fn tool_timeout(&self) -> Duration {
        Duration::from_secs(self.tool_timeout_secs)
    }
}
