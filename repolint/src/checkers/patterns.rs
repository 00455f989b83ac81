//! File name patterns shared by several checkers.

use regex::Regex;

/// Matchers for documentation, README and LICENSE files.
#[derive(Debug, Clone)]
pub struct FilePatterns {
    documentation: Regex,
    root_license: Regex,
    root_readme: Regex,
}

impl FilePatterns {
    /// Compiles the shared patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            documentation: Regex::new(r"^(?:README|CONTRIBUTING|TODO).*")?,
            root_license: Regex::new(r"(?i)^(?:licen[sc]e|copying)(?:[.-].+)?$")?,
            root_readme: Regex::new(r"(?i)^readme(?:\..+)?$")?,
        })
    }

    /// Returns true for README, CONTRIBUTING and TODO style base names.
    pub fn is_documentation(&self, base_name: &str) -> bool {
        self.documentation.is_match(base_name)
    }

    /// Returns true for a license file at the repository root.
    pub fn is_root_license(&self, path: &str) -> bool {
        self.root_license.is_match(path)
    }

    /// Returns true for a README file at the repository root.
    pub fn is_root_readme(&self, path: &str) -> bool {
        self.root_readme.is_match(path)
    }
}
