//! Vendored dependency directories.

use regex::Regex;

/// Directory names holding third-party code, matched at a path-segment boundary.
const VENDOR_PATTERN: &str = r"(?:^|/)(?:vendor|node_modules|cargo-vendor|third[-_]party)/";

/// Recognizes paths inside vendored dependency directories.
#[derive(Debug, Clone)]
pub struct VendorFilter {
    pattern: Regex,
}

impl VendorFilter {
    /// Compiles the vendor directory pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(VENDOR_PATTERN)?,
        })
    }

    /// Returns true if `path` lies inside a vendored directory.
    #[must_use]
    pub fn is_vendored(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }
}
