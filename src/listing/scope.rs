//! Binding a load to the lifetime of its consumer.
//!
//! A consumer that goes away cancels its token; the in-flight read is
//! dropped (which aborts the HTTP request) and its result is never
//! committed to the listing.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{ListState, Listing, Resource, fetch_collection};
use crate::store::CollectionSource;

/// Load `listing` unless `token` is cancelled first.
///
/// Returns `None` if the scope ended before the read settled; the listing
/// then stays in its loading state.
pub async fn load_scoped<'a, T, S>(
    listing: &'a mut Listing<T>,
    source: &S,
    token: &CancellationToken,
) -> Option<&'a ListState<T>>
where
    T: Resource,
    S: CollectionSource,
{
    if listing.state().is_settled() {
        return Some(listing.state());
    }

    match token
        .run_until_cancelled(fetch_collection::<T, S>(source))
        .await
    {
        Some(result) => {
            listing.settle(result);
            Some(listing.state())
        }
        None => {
            debug!(collection = T::COLLECTION, "unmounted before settle, discarding read");
            None
        }
    }
}
