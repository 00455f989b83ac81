//! Stray editor and OS artifact detection.

use super::accepted::AcceptedFiles;
use super::Checker;
use crate::catalog::RepositoryDescriptor;
use crate::files::{FileDescriptor, FileId, FileSet};
use async_trait::async_trait;
use regex::Regex;

/// Base name patterns of files that should not be committed.
const UNWANTED: [(&str, &str); 6] = [
    // foo.txt.swp
    ("Vim swap", r"^.*\.swp$"),
    // #foo.txt#
    ("Emacs autosave", r"^#.*#$"),
    // foo.txt~
    ("Emacs backup", r"^.*~$"),
    // .#foo.txt
    ("Emacs lock", r"^\.#.*$"),
    ("Mac OS sys", r"(?i)^\.DS_Store$"),
    ("Windows sys", r"^Thumbs\.db$"),
];

/// Warns about editor swap/backup files and OS metadata files.
#[derive(Debug, Clone)]
pub struct UnwantedFileChecker {
    patterns: Vec<(&'static str, Regex)>,
    files: AcceptedFiles,
}

impl UnwantedFileChecker {
    /// Compiles the artifact patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        let patterns = UNWANTED
            .iter()
            .map(|(kind, pattern)| Ok((*kind, Regex::new(pattern)?)))
            .collect::<Result<_, regex::Error>>()?;
        Ok(Self {
            patterns,
            files: AcceptedFiles::default(),
        })
    }

    fn kind_of(&self, base_name: &str) -> Option<&'static str> {
        self.patterns
            .iter()
            .find(|(_, pattern)| pattern.is_match(base_name))
            .map(|(kind, _)| *kind)
    }
}

#[async_trait]
impl Checker for UnwantedFileChecker {
    fn name(&self) -> &'static str {
        "unwanted-file"
    }

    fn reset(&mut self, _repository: &RepositoryDescriptor) {
        self.files.clear();
    }

    fn push_file(&mut self, id: FileId, _file: &mut FileDescriptor) {
        self.files.accept(id);
    }

    async fn check_files(&self, files: &FileSet) -> Vec<String> {
        self.files
            .iter(files)
            .filter_map(|file| {
                let kind = self.kind_of(file.base_name())?;
                Some(format!("remove {kind} file: {}", file.original_path()))
            })
            .collect()
    }
}
