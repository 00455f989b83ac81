//! Misspelled environment variable detection.

use super::accepted::AcceptedFiles;
use super::{Checker, FilePatterns};
use crate::catalog::RepositoryDescriptor;
use crate::files::{FileDescriptor, FileId, FileSet};
use async_trait::async_trait;
use regex::Regex;

/// Common variable name typos and the intended name.
const TYPOS: [(&str, &str); 8] = [
    ("PAHT", "PATH"),
    ("HOEM", "HOME"),
    ("GOPAHT", "GOPATH"),
    ("JAAV_HOME", "JAVA_HOME"),
    ("JAVA_HOEM", "JAVA_HOME"),
    ("JAVE_HOME", "JAVA_HOME"),
    ("CLASSPAHT", "CLASSPATH"),
    ("CLASPATH", "CLASSPATH"),
];

/// Warns about `$VAR` / `${VAR}` references with a misspelled variable name.
#[derive(Debug, Clone)]
pub struct VarTypoChecker {
    patterns: FilePatterns,
    variable: Regex,
    files: AcceptedFiles,
}

impl VarTypoChecker {
    /// Compiles the variable pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn new(patterns: FilePatterns) -> Result<Self, regex::Error> {
        let names: Vec<&str> = TYPOS.iter().map(|(typo, _)| *typo).collect();
        let names = names.join("|");
        let variable = Regex::new(&format!(r"\$(?:\{{({names})\}}|({names})\b)"))?;
        Ok(Self {
            patterns,
            variable,
            files: AcceptedFiles::default(),
        })
    }

    fn corrected(typo: &str) -> Option<&'static str> {
        TYPOS
            .iter()
            .find(|(from, _)| *from == typo)
            .map(|(_, to)| *to)
    }
}

#[async_trait]
impl Checker for VarTypoChecker {
    fn name(&self) -> &'static str {
        "var-typo"
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
                for captures in self.variable.captures_iter(line) {
                    let Some(name) = captures.get(1).or_else(|| captures.get(2)) else {
                        continue;
                    };
                    let Some(corrected) = Self::corrected(name.as_str()) else {
                        continue;
                    };
                    warnings.push(format!(
                        "{}:{}: {} could be a misspelling of {corrected}",
                        file.original_path(),
                        index + 1,
                        &captures[0]
                    ));
                }
            }
        }
        warnings
    }
}
