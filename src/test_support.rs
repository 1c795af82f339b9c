//! In-process stand-in for the PostgREST endpoint, used by tests that need
//! a real HTTP round trip.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::store::StoreConfig;

pub const TEST_ANON_KEY: &str = "test-anon-key";

/// What the fake returns for one collection.
#[derive(Clone)]
pub enum Fixture {
    Rows(Vec<Value>),
    Null,
    Status(u16, String),
    /// Never answers.
    Stall,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    fixtures: Arc<HashMap<String, Fixture>>,
    requests: Arc<Mutex<Vec<(String, HashMap<String, String>)>>>,
}

impl FakeBackend {
    pub fn new(fixtures: impl IntoIterator<Item = (&'static str, Fixture)>) -> Self {
        Self {
            fixtures: Arc::new(
                fixtures
                    .into_iter()
                    .map(|(name, fixture)| (name.to_string(), fixture))
                    .collect(),
            ),
            requests: Arc::default(),
        }
    }

    /// Requests seen so far as `(collection, query params)`.
    pub fn requests(&self) -> Vec<(String, HashMap<String, String>)> {
        self.requests.lock().unwrap().clone()
    }

    /// Bind to an ephemeral port and serve until the test ends.
    pub async fn spawn(self) -> (StoreConfig, tokio::task::JoinHandle<()>) {
        let app = Router::new()
            .route("/rest/v1/{collection}", get(select))
            .with_state(self);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = StoreConfig::default()
            .with_url(format!("http://{}", addr))
            .with_anon_key(TEST_ANON_KEY);
        (config, handle)
    }
}

async fn select(
    State(backend): State<FakeBackend>,
    Path(collection): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    backend
        .requests
        .lock()
        .unwrap()
        .push((collection.clone(), params.clone()));

    let authorized = headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(TEST_ANON_KEY);
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "message": "Invalid API key" })),
        )
            .into_response();
    }

    match backend.fixtures.get(&collection).cloned() {
        Some(Fixture::Rows(mut rows)) => {
            if let Some(order) = params.get("order") {
                sort_rows(&mut rows, order);
            }
            Json(Value::Array(rows)).into_response()
        }
        Some(Fixture::Null) => Json(Value::Null).into_response(),
        Some(Fixture::Status(status, body)) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response(),
        Some(Fixture::Stall) => std::future::pending::<Response>().await,
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "code": "42P01",
                "message": format!("relation \"public.{}\" does not exist", collection)
            })),
        )
            .into_response(),
    }
}

/// Sort by `column.asc|desc`, comparing values as strings (ISO timestamps
/// and dates order correctly that way).
fn sort_rows(rows: &mut [Value], order: &str) {
    let (column, direction) = order.split_once('.').unwrap_or((order, "asc"));
    rows.sort_by(|a, b| {
        let a = a.get(column).map(|v| v.to_string()).unwrap_or_default();
        let b = b.get(column).map(|v| v.to_string()).unwrap_or_default();
        if direction == "desc" { b.cmp(&a) } else { a.cmp(&b) }
    });
}
