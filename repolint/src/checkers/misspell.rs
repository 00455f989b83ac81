//! Spelling mistakes in documentation, found by the external `misspell` tool.

use super::accepted::AcceptedFiles;
use super::{Checker, FilePatterns};
use crate::catalog::RepositoryDescriptor;
use crate::files::{FileDescriptor, FileId, FileSet};
use crate::tools::{run_tool, MisspellParser, PathTranslator};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

const PROGRAM: &str = "misspell";

/// Runs `misspell -error` over the scratch copies of documentation files.
#[derive(Debug, Clone)]
pub struct MisspellChecker {
    patterns: FilePatterns,
    parser: MisspellParser,
    program: String,
    timeout: Duration,
    repository: String,
    files: AcceptedFiles,
}

impl MisspellChecker {
    /// Creates the checker with the given tool timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the output pattern fails to compile.
    pub fn new(patterns: FilePatterns, timeout: Duration) -> Result<Self, regex::Error> {
        Ok(Self {
            patterns,
            parser: MisspellParser::new()?,
            program: PROGRAM.to_string(),
            timeout,
            repository: String::new(),
            files: AcceptedFiles::default(),
        })
    }

    /// Uses another executable in place of `misspell`.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Turns raw tool output into warnings with repository paths.
    pub(crate) fn warnings_from_output(
        &self,
        output: &str,
        translator: &PathTranslator,
    ) -> Vec<String> {
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let finding = self.parser.parse_line(line);
                if finding.is_none() {
                    debug!(repo = %self.repository, line, "Skipping unrecognized misspell output");
                }
                finding
            })
            .map(|finding| {
                format!(
                    "{}:{}:{}: {}",
                    translator.translate(&finding.path),
                    finding.line,
                    finding.column,
                    finding.message
                )
            })
            .collect()
    }
}

#[async_trait]
impl Checker for MisspellChecker {
    fn name(&self) -> &'static str {
        "misspell"
    }

    fn reset(&mut self, repository: &RepositoryDescriptor) {
        self.repository = repository.full_name.clone();
        self.files.clear();
    }

    fn push_file(&mut self, id: FileId, file: &mut FileDescriptor) {
        if self.patterns.is_documentation(file.base_name()) {
            file.require_local_copy();
            self.files.accept(id);
        }
    }

    async fn check_files(&self, files: &FileSet) -> Vec<String> {
        if self.files.is_empty() {
            return Vec::new();
        }
        let paths = self.files.local_paths(files);
        if paths.is_empty() {
            return Vec::new();
        }

        let mut args = vec!["-error".to_string()];
        args.extend(paths);
        match run_tool(&self.program, &args, self.timeout).await {
            Ok(output) => self.warnings_from_output(&output, &self.files.translator(files)),
            Err(error) => {
                warn!(repo = %self.repository, error = %error, "misspell did not run");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::push_all;

    fn checker() -> MisspellChecker {
        MisspellChecker::new(FilePatterns::new().unwrap(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn flags_documentation_for_local_copy() {
        let mut checker = checker();
        let mut files = FileSet::from_paths(["README.md", "docs/TODO", "main.go", "readme.txt"]);
        push_all(&mut checker, &mut files);

        let flagged: Vec<&str> = files
            .iter()
            .filter(|f| f.requirements().needs_local_copy())
            .map(|f| f.original_path())
            .collect();
        assert_eq!(flagged, ["README.md", "docs/TODO"]);
    }

    #[test]
    fn translates_findings_back_to_repository_paths() {
        let checker = checker();
        let translator = PathTranslator::new([(
            "/tmp/scan/docs%2FREADME.md".to_string(),
            "docs/README.md".to_string(),
        )]);
        let output = "/tmp/scan/docs%2FREADME.md:3:10: \"langauge\" is a misspelling of \"language\"\n\
                      some banner line\n";

        assert_eq!(
            checker.warnings_from_output(output, &translator),
            ["docs/README.md:3:10: \"langauge\" is a misspelling of \"language\""]
        );
    }

    #[tokio::test]
    async fn nothing_accepted_means_no_run() {
        let mut checker = checker().with_program("repolint-test-no-such-program");
        let mut files = FileSet::from_paths(["main.go"]);
        push_all(&mut checker, &mut files);

        assert!(checker.check_files(&files).await.is_empty());
    }

    #[tokio::test]
    async fn tool_failure_yields_no_warnings() {
        let mut checker = checker().with_program("repolint-test-no-such-program");
        let mut files = FileSet::from_paths(["README.md"]);
        push_all(&mut checker, &mut files);
        for file in files.iter_mut() {
            file.set_materialized(Some("/tmp/README.md".into()), None);
        }

        assert!(checker.check_files(&files).await.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn tool_timeout_yields_no_warnings() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("slow-misspell");
        std::fs::write(&script, "#!/bin/sh\nsleep 5\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut checker =
            MisspellChecker::new(FilePatterns::new().unwrap(), Duration::from_millis(100))
                .unwrap()
                .with_program(script.display().to_string());
        let mut files = FileSet::from_paths(["README.md"]);
        push_all(&mut checker, &mut files);
        for file in files.iter_mut() {
            file.set_materialized(Some("/tmp/README.md".into()), None);
        }

        assert!(checker.check_files(&files).await.is_empty());
    }
}
