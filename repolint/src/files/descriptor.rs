//! Repository file descriptor.

use super::Requirements;
use std::path::{Path, PathBuf};

/// One file of a repository tree, plus whatever has been materialized for it.
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    original_path: String,
    base_name: String,
    requirements: Requirements,
    local_path: Option<PathBuf>,
    contents: Option<String>,
    materialized: bool,
}

impl FileDescriptor {
    /// Creates a descriptor for a path as reported by the source tree.
    pub fn new(original_path: impl Into<String>) -> Self {
        let original_path = original_path.into();
        let base_name = original_path
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            original_path,
            base_name,
            requirements: Requirements::default(),
            local_path: None,
            contents: None,
            materialized: false,
        }
    }

    /// Path inside the repository.
    pub fn original_path(&self) -> &str {
        &self.original_path
    }

    /// Final path component.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Requirements declared so far.
    pub fn requirements(&self) -> Requirements {
        self.requirements
    }

    /// Requests an on-disk copy of this file.
    pub fn require_local_copy(&mut self) {
        self.requirements.require_local_copy();
    }

    /// Requests the decoded text of this file.
    pub fn require_contents(&mut self) {
        self.requirements.require_contents();
    }

    /// Path of the on-disk copy, once materialized.
    pub fn local_path(&self) -> Option<&Path> {
        self.local_path.as_deref()
    }

    /// Decoded text; empty when not materialized or when the fetch failed.
    pub fn contents(&self) -> &str {
        self.contents.as_deref().unwrap_or_default()
    }

    /// Returns true once a fetch was attempted for this file.
    pub fn is_materialized(&self) -> bool {
        self.materialized
    }

    /// Returns true if some checker wants content that was not fetched yet.
    pub fn needs_materialization(&self) -> bool {
        !self.materialized && !self.requirements.is_empty()
    }

    pub(crate) fn normalize_requirements(&mut self) {
        self.requirements.normalize();
    }

    pub(crate) fn set_materialized(
        &mut self,
        local_path: Option<PathBuf>,
        contents: Option<String>,
    ) {
        self.local_path = local_path;
        self.contents = contents;
        self.materialized = true;
    }
}
