//! Per-file materialization requirements.

/// What checkers need materialized for one file.
///
/// Flags are only ever set, never cleared, for the rest of a repository scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requirements {
    local_copy: bool,
    contents: bool,
}

impl Requirements {
    /// Requests an on-disk copy, for checkers that hand paths to external tools.
    pub fn require_local_copy(&mut self) {
        self.local_copy = true;
    }

    /// Requests the decoded text, for checkers that scan content in-process.
    pub fn require_contents(&mut self) {
        self.contents = true;
    }

    /// Returns true if an on-disk copy was requested.
    #[must_use]
    pub fn needs_local_copy(&self) -> bool {
        self.local_copy
    }

    /// Returns true if the decoded text was requested.
    #[must_use]
    pub fn needs_contents(&self) -> bool {
        self.contents
    }

    /// Returns true if nobody asked for this file's content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.local_copy && !self.contents
    }

    /// Makes a content request imply a local copy.
    pub fn normalize(&mut self) {
        if self.contents {
            self.local_copy = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contents_imply_local_copy_after_normalize() {
        let mut requirements = Requirements::default();
        requirements.require_contents();
        assert!(!requirements.needs_local_copy());

        requirements.normalize();
        assert!(requirements.needs_local_copy());
        assert!(requirements.needs_contents());
    }

    #[test]
    fn flags_accumulate() {
        let mut requirements = Requirements::default();
        assert!(requirements.is_empty());

        requirements.require_local_copy();
        requirements.require_contents();
        requirements.require_local_copy();

        assert!(requirements.needs_local_copy());
        assert!(requirements.needs_contents());
    }
}
