//! Resource listing core.
//!
//! Every list view in the app has the same shape: on mount it starts
//! loading, issues exactly one read of a whole collection, and ends up
//! either with the rows or with an error. This module implements that once.
//!
//! - [`Resource`]: per-kind configuration (collection name and ordering)
//! - [`ListState`]: the `{items, loading, error}` tri-state
//! - [`Listing`]: one mount's worth of state; never reloads
//! - [`fetch_collection`]: the single read, decoded into `T`

mod resources;
#[cfg(feature = "backend")]
pub mod scope;

#[cfg(all(test, feature = "backend"))]
mod scope_test;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::store::{CollectionQuery, CollectionSource};

/// A row type that can be listed from the backing store.
pub trait Resource: DeserializeOwned {
    /// Name of the backing collection.
    const COLLECTION: &'static str;

    /// How the collection is read. Defaults to store order.
    fn query() -> CollectionQuery {
        CollectionQuery::new(Self::COLLECTION)
    }
}

/// Tri-state result of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<FetchError>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::pending()
    }
}

impl<T> ListState<T> {
    /// `{items: [], loading: true, error: None}`
    pub fn pending() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.loading
    }

    /// Message for the error banner, if the read failed.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.message().to_string())
    }

    /// Apply the outcome of the read. Returns `false` and leaves the state
    /// untouched if it has already settled.
    pub fn settle(&mut self, result: FetchResult<Vec<T>>) -> bool {
        if self.is_settled() {
            return false;
        }

        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.items.clear();
                self.error = Some(err);
            }
        }
        self.loading = false;
        true
    }
}

/// Read every row of `T`'s collection, ordered as `T::query()` says.
///
/// A null payload becomes an empty list. A row that does not decode fails
/// the whole read.
pub async fn fetch_collection<T, S>(source: &S) -> FetchResult<Vec<T>>
where
    T: Resource,
    S: CollectionSource,
{
    let query = T::query();
    let rows = source.select(&query).await?.unwrap_or_default();

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            serde_json::from_value(row).map_err(|e| {
                FetchError::malformed(format!("{} row {}: {}", T::COLLECTION, index, e))
            })
        })
        .collect()
}

/// State of one mounted listing.
///
/// A `Listing` is created fresh per mount and loads at most once; mounting
/// again means creating a new `Listing`.
#[derive(Debug)]
pub struct Listing<T> {
    state: ListState<T>,
}

impl<T: Resource> Default for Listing<T> {
    fn default() -> Self {
        Self::mount()
    }
}

impl<T: Resource> Listing<T> {
    pub fn mount() -> Self {
        debug!(collection = T::COLLECTION, "listing mounted");
        Self {
            state: ListState::pending(),
        }
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn settle(&mut self, result: FetchResult<Vec<T>>) -> bool {
        if let Err(err) = &result {
            warn!(collection = T::COLLECTION, kind = ?err.kind(), "listing failed: {}", err);
        }

        let applied = self.state.settle(result);
        if applied {
            debug!(
                collection = T::COLLECTION,
                items = self.state.items.len(),
                "listing settled"
            );
        } else {
            warn!(collection = T::COLLECTION, "ignoring second settle");
        }
        applied
    }

    /// Issue the read and settle with its outcome.
    ///
    /// Calling this on a settled listing returns the existing state without
    /// touching the store.
    pub async fn load<S: CollectionSource>(&mut self, source: &S) -> &ListState<T> {
        if !self.state.is_settled() {
            let result = fetch_collection::<T, S>(source).await;
            self.settle(result);
        }
        &self.state
    }
}
