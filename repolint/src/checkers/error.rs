//! Checker registry error types.

use thiserror::Error;

/// Errors raised while building or configuring the checker registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A disable list named a checker that does not exist.
    #[error("unknown checker '{name}' (known checkers: {known})")]
    UnknownChecker { name: String, known: String },

    /// Two checkers were registered under one name.
    #[error("checker '{name}' registered twice")]
    DuplicateChecker { name: String },

    /// A checker pattern failed to compile.
    #[error("invalid checker pattern: {0}")]
    Pattern(#[from] regex::Error),
}
