//! Pluggable repository checks.
//!
//! Every check implements [`Checker`] and is driven through three phases per
//! repository:
//!
//! 1. [`Checker::reset`] clears what was gathered for the previous repository.
//! 2. [`Checker::push_file`] sees every file path. A checker interested in a
//!    file flags what it needs on the shared descriptor and keeps its
//!    [`FileId`]. No I/O happens here.
//! 3. [`Checker::check_files`] runs once all requirements of all checkers are
//!    materialized, and returns the warnings in the order they were found.
//!
//! Checkers never see each other; adding one means implementing the trait and
//! registering it in [`CheckerRegistry::with_defaults`].

mod accepted;
mod acronym;
mod broken_link;
mod error;
mod misspell;
mod missing_file;
mod patterns;
mod registry;
mod sloppy_copyright;
mod unwanted_file;
mod var_typo;

pub use acronym::AcronymChecker;
pub use broken_link::BrokenLinkChecker;
pub use error::RegistryError;
pub use misspell::MisspellChecker;
pub use missing_file::MissingFileChecker;
pub use patterns::FilePatterns;
pub use registry::{parse_checker_list, CheckerRegistry};
pub use sloppy_copyright::SloppyCopyrightChecker;
pub use unwanted_file::UnwantedFileChecker;
pub use var_typo::VarTypoChecker;

use crate::catalog::RepositoryDescriptor;
use crate::files::{FileDescriptor, FileId, FileSet};
use async_trait::async_trait;

/// A named inspection run over every scanned repository.
#[async_trait]
pub trait Checker: Send + Sync {
    /// Stable name, used in warning lines and in the disable list.
    fn name(&self) -> &'static str;

    /// Forgets everything gathered for the previous repository.
    fn reset(&mut self, repository: &RepositoryDescriptor);

    /// Looks at a file's path and flags the file if this checker needs it.
    fn push_file(&mut self, id: FileId, file: &mut FileDescriptor);

    /// Inspects the accepted files and returns warning messages.
    async fn check_files(&self, files: &FileSet) -> Vec<String>;
}
