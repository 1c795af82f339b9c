//! Backing store configuration.
//!
//! Values come from the environment and can be overridden by the builder
//! methods, so a CLI flag always wins over an environment variable.

use std::env;
use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

pub const URL_ENV: &str = "SUPABASE_URL";
pub const ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";
pub const TIMEOUT_ENV: &str = "JHT_REQUEST_TIMEOUT_SECS";

#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Backend URL is not configured")]
    #[diagnostic(
        code(jht::config::missing_url),
        help("Set SUPABASE_URL or pass --url, e.g. https://<project>.supabase.co")
    )]
    MissingUrl,

    #[error("Backend anon key is not configured")]
    #[diagnostic(
        code(jht::config::missing_anon_key),
        help("Set SUPABASE_ANON_KEY or pass --anon-key")
    )]
    MissingAnonKey,

    #[error("Invalid request timeout '{value}'")]
    #[diagnostic(
        code(jht::config::invalid_timeout),
        help("JHT_REQUEST_TIMEOUT_SECS must be a whole number of seconds")
    )]
    InvalidTimeout { value: String },

    #[error("Backend anon key is not a valid header value")]
    #[diagnostic(
        code(jht::config::invalid_anon_key),
        help("The key must not contain control characters such as embedded newlines")
    )]
    InvalidAnonKey,

    #[error("Failed to build HTTP client: {message}")]
    #[diagnostic(code(jht::config::http_client))]
    HttpClient { message: String },
}

/// Where the backing store lives and how to authenticate against it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreConfig {
    url: Option<String>,
    anon_key: Option<String>,
    timeout: Option<Duration>,
}

impl StoreConfig {
    /// Read `SUPABASE_URL`, `SUPABASE_ANON_KEY` and `JHT_REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::connection_from_env();
        Ok(match Self::timeout_from_env()? {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        })
    }

    /// Read only `SUPABASE_URL` and `SUPABASE_ANON_KEY`.
    pub fn connection_from_env() -> Self {
        Self {
            url: non_empty(env::var(URL_ENV).ok()),
            anon_key: non_empty(env::var(ANON_KEY_ENV).ok()),
            timeout: None,
        }
    }

    /// Parse `JHT_REQUEST_TIMEOUT_SECS` as whole seconds, if set.
    pub fn timeout_from_env() -> Result<Option<Duration>, ConfigError> {
        match env::var(TIMEOUT_ENV) {
            Ok(value) => value
                .trim()
                .parse()
                .map(|secs| Some(Duration::from_secs(secs)))
                .map_err(|_| ConfigError::InvalidTimeout { value }),
            Err(_) => Ok(None),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = non_empty(Some(url.into()));
        self
    }

    pub fn with_anon_key(mut self, anon_key: impl Into<String>) -> Self {
        self.anon_key = non_empty(Some(anon_key.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL without a trailing slash.
    pub fn url(&self) -> Result<&str, ConfigError> {
        self.url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .ok_or(ConfigError::MissingUrl)
    }

    pub fn anon_key(&self) -> Result<&str, ConfigError> {
        self.anon_key.as_deref().ok_or(ConfigError::MissingAnonKey)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// `<url>/rest/v1/<collection>`
    pub fn rest_url(&self, collection: &str) -> Result<String, ConfigError> {
        Ok(format!("{}/rest/v1/{}", self.url()?, collection))
    }

    /// `<url>/auth/v1/<path>`
    pub fn auth_url(&self, path: &str) -> Result<String, ConfigError> {
        Ok(format!("{}/auth/v1/{}", self.url()?, path))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
