//! Repository catalog acquisition.
//!
//! Pages through the account's repository listing and yields the repositories
//! that survive the [`CatalogFilter`], lazily, one page at a time.

mod error;
mod filter;
mod repository;

pub use error::CatalogError;
pub use filter::{CatalogFilter, SkipReason};
pub use repository::RepositoryDescriptor;

use crate::session::Session;
use crate::source::{RepositoryPage, RepositorySource};
use chrono::Utc;
use futures::future;
use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, info, warn};

/// Upstream statuses that mean "there is no such page" rather than a failure.
const END_OF_LIST_STATUSES: [u16; 2] = [404, 422];

/// Streams the filtered repository catalog of `account`.
///
/// Listing errors on the first page are fatal. On later pages, an upstream
/// answer saying the page does not exist ends the listing instead.
pub fn fetch_catalog<'a>(
    source: &'a dyn RepositorySource,
    session: &'a Session,
    account: &'a str,
    per_page: u8,
    filter: &'a CatalogFilter,
) -> impl Stream<Item = Result<RepositoryDescriptor, CatalogError>> + 'a {
    info!(account, "Listing repositories");
    let now = Utc::now();

    stream::try_unfold(Some(1u32), move |page| async move {
        let Some(page) = page else {
            return Ok(None);
        };
        let listing = fetch_page(source, session, account, page, per_page).await?;
        Ok(listing.map(|listing| (listing.repositories, listing.next_page)))
    })
    .map_ok(|repositories| stream::iter(repositories.into_iter().map(Ok)))
    .try_flatten()
    .try_filter(move |repository| {
        let keep = match filter.skip_reason(repository, now) {
            Some(reason) => {
                debug!(repo = %repository.full_name, %reason, "Skipping repository");
                session.record_skip();
                false
            }
            None => true,
        };
        future::ready(keep)
    })
}

/// Fetches one listing page; `Ok(None)` marks a soft end of the listing.
async fn fetch_page(
    source: &dyn RepositorySource,
    session: &Session,
    account: &str,
    page: u32,
    per_page: u8,
) -> Result<Option<RepositoryPage>, CatalogError> {
    session.record_request();
    match source.list_repositories(account, page, per_page).await {
        Ok(listing) => {
            debug!(
                page,
                count = listing.repositories.len(),
                "Fetched repository names"
            );
            Ok(Some(listing))
        }
        Err(e) if page > 1 && e.status().is_some_and(|s| END_OF_LIST_STATUSES.contains(&s)) => {
            warn!(page, error = %e, "Listing ended early, treating as last page");
            Ok(None)
        }
        Err(e) => Err(CatalogError::ListFailed {
            account: account.to_string(),
            page,
            source: e,
        }),
    }
}
