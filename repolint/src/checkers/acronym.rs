//! Lowercase acronym detection.

use super::accepted::AcceptedFiles;
use super::{Checker, FilePatterns};
use crate::catalog::RepositoryDescriptor;
use crate::files::{FileDescriptor, FileId, FileSet};
use async_trait::async_trait;
use regex::Regex;

/// Acronyms and their canonical spelling.
const ACRONYMS: [(&str, &str); 10] = [
    ("gnu", "GNU"),
    ("sql", "SQL"),
    ("dsl", "DSL"),
    ("ansi", "ANSI"),
    ("bios", "BIOS"),
    ("cgi", "CGI"),
    ("ssa", "SSA"),
    ("dpi", "DPI"),
    ("gui", "GUI"),
    ("oop", "OOP"),
];

/// Warns about acronyms written in the wrong case in documentation files.
///
/// A token only counts when it stands alone between whitespace or line edges,
/// so `sqlite` or `sql,` are left alone.
#[derive(Debug, Clone)]
pub struct AcronymChecker {
    patterns: FilePatterns,
    acronym: Regex,
    files: AcceptedFiles,
}

impl AcronymChecker {
    /// Compiles the acronym pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn new(patterns: FilePatterns) -> Result<Self, regex::Error> {
        let alternatives: Vec<&str> = ACRONYMS.iter().map(|(from, _)| *from).collect();
        let acronym = Regex::new(&format!(
            r"(?i)(?:^|\s)({})(?:$|\s)",
            alternatives.join("|")
        ))?;
        Ok(Self {
            patterns,
            acronym,
            files: AcceptedFiles::default(),
        })
    }

    /// Finds miscased acronyms in one line as `(token, canonical)` pairs.
    fn scan_line<'a>(&self, line: &'a str) -> Vec<(&'a str, &'static str)> {
        let mut found = Vec::new();
        let mut start = 0;
        // Resume right after the token so a shared separator can start the next match.
        while let Some(token) = self
            .acronym
            .captures_at(line, start)
            .and_then(|captures| captures.get(1))
        {
            start = token.end();
            let token = token.as_str();
            let canonical = ACRONYMS
                .iter()
                .find(|(from, _)| from.eq_ignore_ascii_case(token))
                .map(|(_, to)| *to);
            if let Some(canonical) = canonical.filter(|canonical| *canonical != token) {
                found.push((token, canonical));
            }
        }
        found
    }
}

#[async_trait]
impl Checker for AcronymChecker {
    fn name(&self) -> &'static str {
        "acronym"
    }

    fn reset(&mut self, _repository: &RepositoryDescriptor) {
        self.files.clear();
    }

    fn push_file(&mut self, id: FileId, file: &mut FileDescriptor) {
        if self.patterns.is_documentation(file.base_name()) {
            file.require_contents();
            self.files.accept(id);
        }
    }

    async fn check_files(&self, files: &FileSet) -> Vec<String> {
        let mut warnings = Vec::new();
        for file in self.files.iter(files) {
            for (index, line) in file.contents().lines().enumerate() {
                for (token, canonical) in self.scan_line(line) {
                    warnings.push(format!(
                        "{}:{}: replace {token} with {canonical}",
                        file.original_path(),
                        index + 1
                    ));
                }
            }
        }
        warnings
    }
}
