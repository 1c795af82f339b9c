use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::listing::Listing;
use crate::listing::scope::load_scoped;
use crate::models::{Destination, Event};
use crate::store::RestStore;
use crate::test_support::{FakeBackend, Fixture};
use serde_json::json;

#[tokio::test(flavor = "multi_thread")]
async fn cancelled_scope_never_settles() {
    let backend = FakeBackend::new([("events", Fixture::Stall)]);
    let (config, _handle) = backend.clone().spawn().await;
    let store = RestStore::new(config).unwrap();

    let token = CancellationToken::new();
    let unmount = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        unmount.cancel();
    });

    let mut listing = Listing::<Event>::mount();
    let outcome = load_scoped(&mut listing, &store, &token).await;

    assert!(outcome.is_none());
    assert!(listing.state().loading);
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn live_scope_settles_normally() {
    let backend = FakeBackend::new([(
        "destinations",
        Fixture::Rows(vec![
            json!({
                "id": "t1", "name": "Betla National Park", "description": "",
                "image_url": null, "category": "eco", "rating": 4.4,
                "duration": "2 days", "price": 1200, "visitor_count": 900,
                "highlights": ["Elephants"], "location": "Latehar",
                "created_at": "2025-01-01T00:00:00+00:00",
                "updated_at": "2025-01-01T00:00:00+00:00"
            }),
            json!({
                "id": "t3", "name": "Netarhat", "description": "",
                "image_url": null, "category": "adventure", "rating": 4.6,
                "duration": null, "price": null, "visitor_count": 300,
                "highlights": [], "location": "Latehar",
                "created_at": "2025-03-01T00:00:00+00:00",
                "updated_at": "2025-03-01T00:00:00+00:00"
            }),
            json!({
                "id": "t2", "name": "Deoghar", "description": "",
                "image_url": null, "category": "cultural", "rating": 4.8,
                "duration": null, "price": 0, "visitor_count": 5000,
                "highlights": ["Baidyanath Temple"], "location": "Deoghar",
                "created_at": "2025-02-01T00:00:00+00:00",
                "updated_at": "2025-02-01T00:00:00+00:00"
            }),
        ]),
    )]);
    let (config, _handle) = backend.spawn().await;
    let store = RestStore::new(config).unwrap();
    let token = CancellationToken::new();

    let mut listing = Listing::<Destination>::mount();
    let state = load_scoped(&mut listing, &store, &token).await.unwrap();

    let ids: Vec<_> = state.items.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["t3", "t2", "t1"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn already_cancelled_scope_discards_result() {
    let backend = FakeBackend::new([("events", Fixture::Rows(vec![]))]);
    let (config, _handle) = backend.spawn().await;
    let store = RestStore::new(config).unwrap();

    let token = CancellationToken::new();
    token.cancel();

    let mut listing = Listing::<Event>::mount();
    assert!(load_scoped(&mut listing, &store, &token).await.is_none());
    assert!(!listing.state().is_settled());
}
