//! Fetch error types.
//!
//! Every failure of a backing store read is mapped into one [`FetchError`].
//! The variant records what kind of failure it was so callers can branch on
//! it, while `Display` yields only the human-readable message that the
//! rendering layers show in their error banners.

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

/// Message shown when a failure carries no message of its own.
pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// Discriminant of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    Authorization,
    Malformed,
    Unknown,
}

/// A failed read against the backing store.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("{}", or_fallback(.message))]
    #[diagnostic(
        code(jht::fetch::network),
        help("Is the backend reachable? Check SUPABASE_URL or --url.")
    )]
    Network { message: String },

    #[error("{}", or_fallback(.message))]
    #[diagnostic(
        code(jht::fetch::authorization),
        help("The backend rejected the anon key. Check SUPABASE_ANON_KEY or --anon-key.")
    )]
    Authorization { message: String },

    #[error("{}", or_fallback(.message))]
    #[diagnostic(code(jht::fetch::malformed))]
    Malformed { message: String },

    #[error("{}", or_fallback(.message))]
    #[diagnostic(code(jht::fetch::unknown))]
    Unknown { message: String },
}

pub type FetchResult<T> = Result<T, FetchError>;

fn or_fallback(message: &str) -> &str {
    if message.trim().is_empty() {
        FALLBACK_MESSAGE
    } else {
        message
    }
}

/// Error body returned by PostgREST and the auth endpoints.
///
/// PostgREST uses `message`; GoTrue uses `msg` or `error_description`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        FetchError::Network {
            message: message.into(),
        }
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        FetchError::Authorization {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        FetchError::Malformed {
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        FetchError::Unknown {
            message: message.into(),
        }
    }

    /// Classify a non-success HTTP response.
    ///
    /// 401/403 are authorization failures, 400/406/416 mean the query itself
    /// was rejected, everything else is unknown.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            401 | 403 => FetchError::authorization(message),
            400 | 406 | 416 => FetchError::malformed(message),
            _ => FetchError::unknown(message),
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network { .. } => FetchErrorKind::Network,
            FetchError::Authorization { .. } => FetchErrorKind::Authorization,
            FetchError::Malformed { .. } => FetchErrorKind::Malformed,
            FetchError::Unknown { .. } => FetchErrorKind::Unknown,
        }
    }

    /// The message as shown to users, falling back to [`FALLBACK_MESSAGE`].
    pub fn message(&self) -> &str {
        match self {
            FetchError::Network { message }
            | FetchError::Authorization { message }
            | FetchError::Malformed { message }
            | FetchError::Unknown { message } => or_fallback(message),
        }
    }

    /// Only transport failures are worth retrying; nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        self.kind() == FetchErrorKind::Network
    }
}

fn extract_message(body: &str) -> String {
    let body = body.trim();
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed
            .message
            .or(parsed.msg)
            .or(parsed.error_description)
            .unwrap_or_default(),
        Err(_) => body.to_string(),
    }
}

#[cfg(feature = "backend")]
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::malformed(e.to_string())
        } else {
            FetchError::network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::malformed(e.to_string())
    }
}

impl From<crate::store::ConfigError> for FetchError {
    fn from(e: crate::store::ConfigError) -> Self {
        FetchError::unknown(e.to_string())
    }
}
