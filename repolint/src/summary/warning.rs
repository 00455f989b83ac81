//! Warning lines.

use std::fmt;

/// One finding of one checker in one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Repository as `<host>/<owner>/<name>`.
    pub repository: String,
    /// Name of the checker that raised the warning.
    pub checker: &'static str,
    /// Checker-specific message.
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.repository, self.checker, self.message)
    }
}
