//! Native PostgREST client built on reqwest.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use tracing::{debug, warn};

use super::{CollectionQuery, CollectionSource, ConfigError, StoreConfig, decode_rows};
use crate::error::{FetchError, FetchResult};

/// Reads collections from `<url>/rest/v1/<collection>`.
#[derive(Debug, Clone)]
pub struct RestStore {
    config: StoreConfig,
    client: Client,
}

impl RestStore {
    /// Validate the configuration and build the HTTP client.
    ///
    /// The anon key is sent both as `apikey` and as the bearer token on every
    /// request. A configured timeout is handed to reqwest as-is.
    pub fn new(config: StoreConfig) -> Result<Self, ConfigError> {
        config.url()?;
        let _ = rustls::crypto::ring::default_provider().install_default();
        let anon_key = config.anon_key()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let apikey = HeaderValue::from_str(anon_key).map_err(|_| ConfigError::InvalidAnonKey)?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", anon_key))
            .map_err(|_| ConfigError::InvalidAnonKey)?;
        headers.insert("apikey", apikey);
        headers.insert(AUTHORIZATION, bearer);

        let mut builder = ClientBuilder::new()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| ConfigError::HttpClient {
            message: e.to_string(),
        })?;

        Ok(Self { config, client })
    }
}

impl CollectionSource for RestStore {
    async fn select(&self, query: &CollectionQuery) -> FetchResult<Option<Vec<Value>>> {
        let url = self.config.rest_url(query.collection())?;
        debug!(
            collection = query.collection(),
            order = ?query.order().map(|o| o.to_param()),
            "selecting collection"
        );

        let response = self
            .client
            .get(&url)
            .query(&query.params())
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(FetchError::from)?;

        if !status.is_success() {
            let err = FetchError::from_status(status.as_u16(), &body);
            warn!(
                collection = query.collection(),
                status = status.as_u16(),
                kind = ?err.kind(),
                "select failed: {}",
                err
            );
            return Err(err);
        }

        let rows = decode_rows(&body)?;
        debug!(
            collection = query.collection(),
            rows = rows.as_ref().map(Vec::len),
            "select settled"
        );
        Ok(rows)
    }
}
