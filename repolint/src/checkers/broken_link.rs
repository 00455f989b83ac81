//! Dead links in documentation, found by the external `liche` tool.

use super::accepted::AcceptedFiles;
use super::{Checker, FilePatterns};
use crate::catalog::RepositoryDescriptor;
use crate::files::{FileDescriptor, FileId, FileSet};
use crate::tools::{parse_liche_output, run_tool, LinkFailure, PathTranslator};
use async_trait::async_trait;
use regex::Regex;
use std::time::Duration;
use tracing::warn;

const PROGRAM: &str = "liche";

/// Per-link timeout handed to the tool, in seconds.
const LINK_TIMEOUT_SECS: &str = "30";

/// URLs never reported: release artifacts and local or placeholder hosts.
const EXCLUDED_URLS: &str = r"/release|/download|localhost|127\.[01]\.[01]\.[01]|example\.com";

/// Failure reasons that say more about the link checker than about the link.
const IGNORED_REASONS: [&str; 2] = ["no such file", "root directory is not specified"];

/// Runs `liche` over the scratch copies of documentation files.
#[derive(Debug, Clone)]
pub struct BrokenLinkChecker {
    patterns: FilePatterns,
    excluded: Regex,
    program: String,
    timeout: Duration,
    repository: String,
    files: AcceptedFiles,
}

impl BrokenLinkChecker {
    /// Creates the checker with the given tool timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the exclusion pattern fails to compile.
    pub fn new(patterns: FilePatterns, timeout: Duration) -> Result<Self, regex::Error> {
        Ok(Self {
            patterns,
            excluded: Regex::new(EXCLUDED_URLS)?,
            program: PROGRAM.to_string(),
            timeout,
            repository: String::new(),
            files: AcceptedFiles::default(),
        })
    }

    /// Uses another executable in place of `liche`.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn is_reportable(&self, failure: &LinkFailure) -> bool {
        if failure.reason == "Timeout" {
            return false;
        }
        if IGNORED_REASONS
            .iter()
            .any(|reason| failure.reason.contains(reason))
        {
            return false;
        }
        !self.excluded.is_match(&failure.url)
    }

    /// Turns raw tool output into warnings with repository paths.
    pub(crate) fn warnings_from_output(
        &self,
        output: &str,
        translator: &PathTranslator,
    ) -> Vec<String> {
        parse_liche_output(output)
            .into_iter()
            .filter(|failure| self.is_reportable(failure))
            .map(|failure| {
                format!(
                    "{}: {}: {}",
                    translator.translate(&failure.file),
                    failure.url,
                    failure.reason
                )
            })
            .collect()
    }
}

#[async_trait]
impl Checker for BrokenLinkChecker {
    fn name(&self) -> &'static str {
        "broken-link"
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

        let mut args = vec![
            "-t".to_string(),
            LINK_TIMEOUT_SECS.to_string(),
            "-x".to_string(),
            EXCLUDED_URLS.to_string(),
        ];
        args.extend(paths);
        match run_tool(&self.program, &args, self.timeout).await {
            Ok(output) => self.warnings_from_output(&output, &self.files.translator(files)),
            Err(error) => {
                warn!(repo = %self.repository, error = %error, "liche did not run");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT: &str = "/tmp/scan/README.md\n\
\tOK\thttps://github.com\n\
\tERROR\thttp://non-existing.link.ever/ok\n\
\t\tLookup non-existing.link.ever on 127.0.1.1:53: no such host\n\
\tERROR\thttps://slow.example.org\n\
\t\tTimeout\n\
\tERROR\thttps://github.com/octo/hello/releases/download/v1/hello.tgz\n\
\t\tNot Found (HTTP error 404)\n\
\tERROR\thttp://localhost:8080\n\
\t\tconnection refused\n\
\tERROR\tdocs/guide.md\n\
\t\topen docs/guide.md: no such file or directory\n\
/tmp/scan/docs%2FCONTRIBUTING.md\n\
\tERROR\thttps://link.foo-and-bar.by\n\
\t\tLookup link.foo-and-bar.by on 127.0.1.1:53: no such host\n";

    fn checker() -> BrokenLinkChecker {
        BrokenLinkChecker::new(FilePatterns::new().unwrap(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn reports_only_genuine_failures() {
        let translator = PathTranslator::new([
            ("/tmp/scan/README.md".to_string(), "README.md".to_string()),
            (
                "/tmp/scan/docs%2FCONTRIBUTING.md".to_string(),
                "docs/CONTRIBUTING.md".to_string(),
            ),
        ]);

        assert_eq!(
            checker().warnings_from_output(OUTPUT, &translator),
            [
                "README.md: http://non-existing.link.ever/ok: Lookup non-existing.link.ever on 127.0.1.1:53: no such host",
                "docs/CONTRIBUTING.md: https://link.foo-and-bar.by: Lookup link.foo-and-bar.by on 127.0.1.1:53: no such host",
            ]
        );
    }

    #[tokio::test]
    async fn tool_failure_yields_no_warnings() {
        let mut checker = checker().with_program("repolint-test-no-such-program");
        let mut files = FileSet::from_paths(["README.md"]);
        crate::testing::push_all(&mut checker, &mut files);
        for file in files.iter_mut() {
            file.set_materialized(Some("/tmp/README.md".into()), None);
        }

        assert!(checker.check_files(&files).await.is_empty());
    }
}
