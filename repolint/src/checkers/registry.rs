//! Ordered collection of enabled checkers.

use super::{
    AcronymChecker, BrokenLinkChecker, Checker, FilePatterns, MisspellChecker,
    MissingFileChecker, RegistryError, SloppyCopyrightChecker, UnwantedFileChecker,
    VarTypoChecker,
};
use crate::catalog::RepositoryDescriptor;
use crate::files::{FileDescriptor, FileId, FileSet};
use futures::future::join_all;
use indexmap::IndexMap;
use std::time::Duration;

/// Checkers keyed by name, in registration order.
#[derive(Default)]
pub struct CheckerRegistry {
    checkers: IndexMap<&'static str, Box<dyn Checker>>,
}

impl CheckerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in checker.
    ///
    /// `tool_timeout` bounds each run of an external tool.
    ///
    /// # Errors
    ///
    /// Returns an error if a checker pattern fails to compile.
    pub fn with_defaults(tool_timeout: Duration) -> Result<Self, RegistryError> {
        let patterns = FilePatterns::new()?;
        let mut registry = Self::new();
        registry.register(Box::new(MissingFileChecker::new(patterns.clone())))?;
        registry.register(Box::new(UnwantedFileChecker::new()?))?;
        registry.register(Box::new(MisspellChecker::new(
            patterns.clone(),
            tool_timeout,
        )?))?;
        registry.register(Box::new(BrokenLinkChecker::new(
            patterns.clone(),
            tool_timeout,
        )?))?;
        registry.register(Box::new(SloppyCopyrightChecker::new(patterns.clone())?))?;
        registry.register(Box::new(AcronymChecker::new(patterns.clone())?))?;
        registry.register(Box::new(VarTypoChecker::new(patterns)?))?;
        Ok(registry)
    }

    /// Adds a checker after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateChecker`] if the name is taken.
    pub fn register(&mut self, checker: Box<dyn Checker>) -> Result<(), RegistryError> {
        let name = checker.name();
        if self.checkers.contains_key(name) {
            return Err(RegistryError::DuplicateChecker {
                name: name.to_string(),
            });
        }
        self.checkers.insert(name, checker);
        Ok(())
    }

    /// Removes the named checkers.
    ///
    /// All names are validated first; on error nothing is removed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownChecker`] for the first unknown name.
    pub fn disable<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), RegistryError> {
        if let Some(unknown) = names
            .iter()
            .map(AsRef::as_ref)
            .find(|name| !self.checkers.contains_key(*name))
        {
            return Err(RegistryError::UnknownChecker {
                name: unknown.to_string(),
                known: self.names().join(", "),
            });
        }
        for name in names {
            self.checkers.shift_remove(name.as_ref());
        }
        Ok(())
    }

    /// Enabled checker names in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.checkers.keys().copied().collect()
    }

    /// Returns true if a checker with this name is enabled.
    pub fn contains(&self, name: &str) -> bool {
        self.checkers.contains_key(name)
    }

    /// Number of enabled checkers.
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    /// Returns true if no checker is enabled.
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Resets every checker for a new repository.
    pub fn reset_all(&mut self, repository: &RepositoryDescriptor) {
        for checker in self.checkers.values_mut() {
            checker.reset(repository);
        }
    }

    /// Offers one file to every checker in order.
    pub fn push_file(&mut self, id: FileId, file: &mut FileDescriptor) {
        for checker in self.checkers.values_mut() {
            checker.push_file(id, file);
        }
    }

    /// Runs all checkers concurrently and returns their warnings in
    /// registration order.
    pub async fn check_all(&self, files: &FileSet) -> Vec<(&'static str, Vec<String>)> {
        let runs = self.checkers.iter().map(|(name, checker)| async move {
            (*name, checker.check_files(files).await)
        });
        join_all(runs).await
    }
}

/// Splits a comma separated checker list, dropping blanks.
pub fn parse_checker_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::materialize;

    fn registry() -> CheckerRegistry {
        CheckerRegistry::with_defaults(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn registers_builtins_in_order() {
        assert_eq!(
            registry().names(),
            [
                "missing-file",
                "unwanted-file",
                "misspell",
                "broken-link",
                "sloppy-copyright",
                "acronym",
                "var-typo",
            ]
        );
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut registry = registry();
        let checker = MissingFileChecker::new(FilePatterns::new().unwrap());

        let result = registry.register(Box::new(checker));

        assert!(matches!(
            result,
            Err(RegistryError::DuplicateChecker { name }) if name == "missing-file"
        ));
    }

    #[test]
    fn disables_named_checkers() {
        let mut registry = registry();

        registry.disable(&["misspell", "broken-link"]).unwrap();

        assert_eq!(registry.len(), 5);
        assert!(!registry.contains("misspell"));
        assert!(!registry.contains("broken-link"));
        assert!(registry.contains("acronym"));
    }

    #[test]
    fn unknown_name_disables_nothing() {
        let mut registry = registry();

        let result = registry.disable(&["acronym", "spellcheck"]);

        assert!(matches!(
            result,
            Err(RegistryError::UnknownChecker { name, .. }) if name == "spellcheck"
        ));
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn parses_checker_lists() {
        assert_eq!(
            parse_checker_list(" misspell, ,broken-link,"),
            ["misspell", "broken-link"]
        );
        assert!(parse_checker_list("").is_empty());
    }

    #[tokio::test]
    async fn collects_warnings_per_checker() {
        let mut registry = registry();
        registry.disable(&["misspell", "broken-link"]).unwrap();
        let mut files = FileSet::from_paths(["README.md", ".DS_Store"]);

        registry.reset_all(&RepositoryDescriptor::new("octo", "hello"));
        for (id, file) in files.entries_mut() {
            registry.push_file(id, file);
        }
        materialize(&mut files, "README.md", "a gui for $PAHT");

        let results = registry.check_all(&files).await;
        let names: Vec<&str> = results.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["missing-file", "unwanted-file", "sloppy-copyright", "acronym", "var-typo"]
        );
        assert_eq!(results[0].1, ["missing root LICENSE file"]);
        assert_eq!(results[1].1, ["remove Mac OS sys file: .DS_Store"]);
        assert!(results[2].1.is_empty());
        assert_eq!(results[3].1, ["README.md:1: replace gui with GUI"]);
        assert_eq!(
            results[4].1,
            ["README.md:1: $PAHT could be a misspelling of PATH"]
        );
    }
}
