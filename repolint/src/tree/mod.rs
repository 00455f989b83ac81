//! Repository tree collection.

mod vendor;

pub use vendor::VendorFilter;

use crate::catalog::RepositoryDescriptor;
use crate::files::FileSet;
use crate::session::Session;
use crate::source::{RepositorySource, SourceError};
use tracing::{debug, warn};

/// Flattens a repository's default-branch tree into a [`FileSet`].
#[derive(Debug, Clone)]
pub struct TreeCollector {
    vendor: Option<VendorFilter>,
}

impl TreeCollector {
    /// Creates a collector, optionally dropping vendored paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the vendor pattern fails to compile.
    pub fn new(skip_vendor: bool) -> Result<Self, regex::Error> {
        let vendor = if skip_vendor {
            Some(VendorFilter::new()?)
        } else {
            None
        };
        Ok(Self { vendor })
    }

    /// Lists every file of `repository`, minus vendored paths.
    ///
    /// A truncated listing is used as-is after a warning.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the tree cannot be fetched.
    pub async fn collect(
        &self,
        source: &dyn RepositorySource,
        session: &Session,
        repository: &RepositoryDescriptor,
    ) -> Result<FileSet, SourceError> {
        session.record_request();
        let tree = source.file_tree(repository).await?;

        if tree.truncated {
            warn!(
                repo = %repository.full_name,
                count = tree.paths.len(),
                "File tree was truncated, checking partial listing"
            );
        }

        let total = tree.paths.len();
        let paths: Vec<String> = match &self.vendor {
            Some(vendor) => tree
                .paths
                .into_iter()
                .filter(|path| !vendor.is_vendored(path))
                .collect(),
            None => tree.paths,
        };
        debug!(
            repo = %repository.full_name,
            files = paths.len(),
            vendored = total - paths.len(),
            "Collected files"
        );

        Ok(FileSet::from_paths(paths))
    }
}
