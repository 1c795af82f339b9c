use crate::error::FetchErrorKind;
use crate::store::{CollectionQuery, CollectionSource, ConfigError, RestStore, StoreConfig};
use crate::test_support::{FakeBackend, Fixture};
use serde_json::json;

#[test]
fn new_requires_url_and_key() {
    let missing_url = RestStore::new(StoreConfig::default().with_anon_key("k"));
    assert_eq!(missing_url.unwrap_err(), ConfigError::MissingUrl);

    let missing_key = RestStore::new(StoreConfig::default().with_url("http://localhost:54321"));
    assert_eq!(missing_key.unwrap_err(), ConfigError::MissingAnonKey);
}

#[test]
fn new_rejects_keys_that_cannot_be_sent_as_headers() {
    let config = StoreConfig::default()
        .with_url("http://localhost:54321")
        .with_anon_key("anon\nkey");
    assert_eq!(RestStore::new(config).unwrap_err(), ConfigError::InvalidAnonKey);
}

#[tokio::test(flavor = "multi_thread")]
async fn select_sends_select_and_order_params() {
    let backend = FakeBackend::new([(
        "destinations",
        Fixture::Rows(vec![
            json!({"id": "a", "created_at": "2025-01-01T00:00:00+00:00"}),
            json!({"id": "b", "created_at": "2025-03-01T00:00:00+00:00"}),
        ]),
    )]);
    let (config, _handle) = backend.clone().spawn().await;
    let store = RestStore::new(config).unwrap();

    let query = CollectionQuery::new("destinations").descending("created_at");
    let rows = store.select(&query).await.unwrap().unwrap();

    let ids: Vec<_> = rows.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["b", "a"]);

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "destinations");
    assert_eq!(requests[0].1.get("select").map(String::as_str), Some("*"));
    assert_eq!(
        requests[0].1.get("order").map(String::as_str),
        Some("created_at.desc")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn select_without_order_omits_order_param() {
    let backend = FakeBackend::new([("products", Fixture::Rows(vec![]))]);
    let (config, _handle) = backend.clone().spawn().await;
    let store = RestStore::new(config).unwrap();

    let rows = store
        .select(&CollectionQuery::new("products"))
        .await
        .unwrap();
    assert_eq!(rows, Some(vec![]));
    assert!(!backend.requests()[0].1.contains_key("order"));
}

#[tokio::test(flavor = "multi_thread")]
async fn null_payload_is_none() {
    let backend = FakeBackend::new([("events", Fixture::Null)]);
    let (config, _handle) = backend.spawn().await;
    let store = RestStore::new(config).unwrap();

    let rows = store.select(&CollectionQuery::new("events")).await.unwrap();
    assert_eq!(rows, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn wrong_key_is_an_authorization_error() {
    let backend = FakeBackend::new([("events", Fixture::Rows(vec![]))]);
    let (config, _handle) = backend.spawn().await;
    let store = RestStore::new(config.with_anon_key("wrong")).unwrap();

    let err = store
        .select(&CollectionQuery::new("events"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Authorization);
    assert_eq!(err.to_string(), "Invalid API key");
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_body_message_is_surfaced() {
    let backend = FakeBackend::new([(
        "events",
        Fixture::Status(500, r#"{"message":"canceling statement due to statement timeout"}"#.to_string()),
    )]);
    let (config, _handle) = backend.spawn().await;
    let store = RestStore::new(config).unwrap();

    let err = store
        .select(&CollectionQuery::new("events"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Unknown);
    assert_eq!(err.message(), "canceling statement due to statement timeout");
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_collection_is_reported() {
    let backend = FakeBackend::new([]);
    let (config, _handle) = backend.spawn().await;
    let store = RestStore::new(config).unwrap();

    let err = store
        .select(&CollectionQuery::new("bookings"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Unknown);
    assert_eq!(err.message(), "relation \"public.bookings\" does not exist");
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_backend_is_a_network_error() {
    // Bind then drop a listener so the port is known to be closed
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = StoreConfig::default()
        .with_url(format!("http://{}", addr))
        .with_anon_key("k");
    let store = RestStore::new(config).unwrap();

    let err = store
        .select(&CollectionQuery::new("events"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Network);
    assert!(err.is_retryable());
}
