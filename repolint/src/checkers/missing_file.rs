//! Missing root README / LICENSE detection.

use super::{Checker, FilePatterns};
use crate::catalog::RepositoryDescriptor;
use crate::files::{FileDescriptor, FileId, FileSet};
use async_trait::async_trait;

/// Warns when the repository root has no README or no LICENSE file.
#[derive(Debug, Clone)]
pub struct MissingFileChecker {
    patterns: FilePatterns,
    seen_readme: bool,
    seen_license: bool,
}

impl MissingFileChecker {
    pub fn new(patterns: FilePatterns) -> Self {
        Self {
            patterns,
            seen_readme: false,
            seen_license: false,
        }
    }
}

#[async_trait]
impl Checker for MissingFileChecker {
    fn name(&self) -> &'static str {
        "missing-file"
    }

    fn reset(&mut self, _repository: &RepositoryDescriptor) {
        self.seen_readme = false;
        self.seen_license = false;
    }

    fn push_file(&mut self, _id: FileId, file: &mut FileDescriptor) {
        let path = file.original_path();
        if self.patterns.is_root_readme(path) {
            self.seen_readme = true;
        } else if self.patterns.is_root_license(path) {
            self.seen_license = true;
        }
    }

    async fn check_files(&self, _files: &FileSet) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.seen_readme {
            warnings.push("missing root README file".to_string());
        }
        if !self.seen_license {
            warnings.push("missing root LICENSE file".to_string());
        }
        warnings
    }
}
