use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

use jharkhand_tourism::error::{FetchError, FetchResult};
use jharkhand_tourism::models::{AuthSession, SignInRequest};
use jharkhand_tourism::store::{CollectionQuery, CollectionSource, StoreConfig, decode_rows};

/// Backend connection baked in at build time.
///
/// Trunk passes `SUPABASE_URL` and `SUPABASE_ANON_KEY` through from the
/// build environment; a missing value surfaces as a fetch error in the UI.
#[derive(Debug, Clone)]
pub struct BrowserStore {
    config: StoreConfig,
}

impl BrowserStore {
    pub fn from_build_env() -> Self {
        Self {
            config: StoreConfig::default()
                .with_url(option_env!("SUPABASE_URL").unwrap_or_default())
                .with_anon_key(option_env!("SUPABASE_ANON_KEY").unwrap_or_default()),
        }
    }

    /// Attach `apikey` and a bearer token (the anon key unless `token` is given).
    fn authorize(&self, request: RequestBuilder, token: Option<&str>) -> FetchResult<RequestBuilder> {
        let anon_key = self.config.anon_key()?;
        let bearer = format!("Bearer {}", token.unwrap_or(anon_key));
        Ok(request
            .header("apikey", anon_key)
            .header("Authorization", &bearer)
            .header("Accept", "application/json"))
    }
}

/// Read the whole body, classifying non-2xx statuses.
async fn read_body(response: Response) -> FetchResult<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::malformed(e.to_string()))?;

    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(FetchError::from_status(status, &body))
    }
}

impl CollectionSource for BrowserStore {
    async fn select(&self, query: &CollectionQuery) -> FetchResult<Option<Vec<Value>>> {
        let url = format!(
            "{}?{}",
            self.config.rest_url(query.collection())?,
            query.query_string()
        );

        let response = self
            .authorize(Request::get(&url), None)?
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        decode_rows(&read_body(response).await?)
    }
}

/// Auth API
pub mod auth {
    use super::*;

    /// Password grant; returns the new session.
    pub async fn sign_in(
        store: &BrowserStore,
        email: String,
        password: String,
    ) -> FetchResult<AuthSession> {
        let url = format!("{}?grant_type=password", store.config.auth_url("token")?);
        let request = store
            .authorize(Request::post(&url), None)?
            .json(&SignInRequest { email, password })
            .map_err(|e| FetchError::malformed(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Revoke the session server-side.
    pub async fn sign_out(store: &BrowserStore, access_token: &str) -> FetchResult<()> {
        let url = store.config.auth_url("logout")?;
        let response = store
            .authorize(Request::post(&url), Some(access_token))?
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        read_body(response).await.map(|_| ())
    }
}
