//! Catalog error types.

use crate::source::SourceError;
use thiserror::Error;

/// Errors that abort catalog acquisition.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A repository page could not be listed.
    #[error("list repositories of '{account}' (page={page}): {source}")]
    ListFailed {
        account: String,
        page: u32,
        #[source]
        source: SourceError,
    },
}
