//! Scan settings.
//!
//! Settings come from an optional kebab-case TOML file; every key has a
//! default, and command line flags are applied on top by the caller.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::ScanSettings;
