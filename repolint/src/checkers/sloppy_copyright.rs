//! License template placeholder detection.

use super::accepted::AcceptedFiles;
use super::{Checker, FilePatterns};
use crate::catalog::RepositoryDescriptor;
use crate::files::{FileDescriptor, FileId, FileSet};
use async_trait::async_trait;
use regex::Regex;

/// Copyright line whose holder is still the template's `full name` placeholder.
///
/// A bare `year` is not enough: the GPLv2 appendix legitimately reads
/// `Copyright (C) year name of author`.
const SLOPPY_COPYRIGHT: &str =
    r"copyright\s*(?:\(c\)|©)?\s*(?:\[?year\]?|\d{4}),?\s*\[?full ?name\]?";

/// Warns about root license files whose copyright line was never filled in.
#[derive(Debug, Clone)]
pub struct SloppyCopyrightChecker {
    patterns: FilePatterns,
    copyright: Regex,
    files: AcceptedFiles,
}

impl SloppyCopyrightChecker {
    /// Compiles the copyright pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn new(patterns: FilePatterns) -> Result<Self, regex::Error> {
        let copyright = Regex::new(&format!("(?i){SLOPPY_COPYRIGHT}"))?;
        Ok(Self {
            patterns,
            copyright,
            files: AcceptedFiles::default(),
        })
    }
}

#[async_trait]
impl Checker for SloppyCopyrightChecker {
    fn name(&self) -> &'static str {
        "sloppy-copyright"
    }

    fn reset(&mut self, _repository: &RepositoryDescriptor) {
        self.files.clear();
    }

    fn push_file(&mut self, id: FileId, file: &mut FileDescriptor) {
        if self.patterns.is_root_license(file.original_path()) {
            file.require_contents();
            self.files.accept(id);
        }
    }

    async fn check_files(&self, files: &FileSet) -> Vec<String> {
        self.files
            .iter(files)
            .filter(|file| self.copyright.is_match(file.contents()))
            .map(|file| format!("{}: license contains sloppy copyright", file.original_path()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{materialize, push_all};

    async fn check(license: &str) -> Vec<String> {
        let mut checker = SloppyCopyrightChecker::new(FilePatterns::new().unwrap()).unwrap();
        let mut files = FileSet::from_paths(["LICENSE", "src/main.go"]);
        push_all(&mut checker, &mut files);
        materialize(&mut files, "LICENSE", license);
        checker.check_files(&files).await
    }

    #[tokio::test]
    async fn flags_placeholders() {
        for license in [
            "MIT License\n\nCopyright (c) year full name\n",
            "Copyright © 2018 fullname",
            "COPYRIGHT YEAR FULL NAME",
            "Copyright (c) [year] [fullname]",
            "Copyright year, full name",
        ] {
            assert_eq!(
                check(license).await,
                ["LICENSE: license contains sloppy copyright"],
                "{license}"
            );
        }
    }

    #[tokio::test]
    async fn accepts_filled_in_notice() {
        assert!(check("Copyright (c) 2018 Jane Doe").await.is_empty());
        assert!(check("Copyright (c) 2015 Yearbook Inc.").await.is_empty());
    }

    #[tokio::test]
    async fn accepts_unmodified_gpl_appendix() {
        let license = concat!(
            "    Gnomovision version 69, Copyright (C) year name of author\n",
            "    Gnomovision comes with ABSOLUTELY NO WARRANTY\n",
            "Copyright (C) <year>  <name of author>\n",
        );

        assert!(check(license).await.is_empty());
    }

    #[tokio::test]
    async fn only_root_license_requests_contents() {
        let mut checker = SloppyCopyrightChecker::new(FilePatterns::new().unwrap()).unwrap();
        let mut files = FileSet::from_paths(["LICENSE", "vendor-docs/LICENSE"]);
        push_all(&mut checker, &mut files);

        let flagged: Vec<&str> = files
            .iter()
            .filter(|f| f.requirements().needs_contents())
            .map(|f| f.original_path())
            .collect();
        assert_eq!(flagged, ["LICENSE"]);
    }
}
