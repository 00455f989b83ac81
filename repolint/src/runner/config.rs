//! Runner configuration.

use crate::config::ScanSettings;
use crate::dispatcher::DEFAULT_HOST;

/// Configuration for one scan of an account.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Account whose repositories are scanned.
    account: String,
    /// GitHub token used for API calls.
    token: String,
    /// Scan tunables.
    settings: ScanSettings,
    /// Where the settings came from, for error messages.
    settings_origin: String,
    /// Host prefix of warning lines.
    host: String,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(account: String, token: String, settings: ScanSettings) -> Self {
        Self {
            account,
            token,
            settings,
            settings_origin: "command line".to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }

    /// Records where the settings were loaded from.
    pub fn with_settings_origin(mut self, origin: impl Into<String>) -> Self {
        self.settings_origin = origin.into();
        self
    }

    /// Sets a custom warning host prefix.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Returns the scanned account.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the scan settings.
    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    /// Returns where the settings came from.
    pub fn settings_origin(&self) -> &str {
        &self.settings_origin
    }

    /// Returns the warning host prefix.
    pub fn host(&self) -> &str {
        &self.host
    }
}
