pub mod error;
pub mod listing;
pub mod models;
pub mod store;

#[cfg(feature = "backend")]
pub mod cli;

#[cfg(all(test, feature = "backend"))]
mod test_support;

pub use error::{FetchError, FetchErrorKind, FetchResult};
pub use listing::{ListState, Listing, Resource, fetch_collection};
