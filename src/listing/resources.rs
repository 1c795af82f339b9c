//! Per-kind listing configuration.

use super::Resource;
use crate::models::{Destination, Event, Product};
use crate::store::CollectionQuery;

/// Newest first.
impl Resource for Destination {
    const COLLECTION: &'static str = "destinations";

    fn query() -> CollectionQuery {
        CollectionQuery::new(Self::COLLECTION).descending("created_at")
    }
}

/// Soonest first.
impl Resource for Event {
    const COLLECTION: &'static str = "events";

    fn query() -> CollectionQuery {
        CollectionQuery::new(Self::COLLECTION).ascending("event_date")
    }
}

impl Resource for Product {
    const COLLECTION: &'static str = "products";
}
