//! Backing store abstraction.
//!
//! The store answers one kind of question: "every row of collection C,
//! ordered by O". Rows come back as raw JSON so that decoding into a
//! concrete model happens in one place ([`crate::listing::fetch_collection`]).
//!
//! - `query`: what to read
//! - `config`: where to read it from
//! - `rest`: native PostgREST client (feature `backend`)

mod config;
mod query;
#[cfg(feature = "backend")]
mod rest;

#[cfg(test)]
mod query_test;
#[cfg(all(test, feature = "backend"))]
mod rest_test;

pub use config::{ANON_KEY_ENV, ConfigError, StoreConfig, TIMEOUT_ENV, URL_ENV};
pub use query::{CollectionQuery, Direction, Order};
#[cfg(feature = "backend")]
pub use rest::RestStore;

use serde_json::Value;

use crate::error::{FetchError, FetchResult};

#[cfg(test)]
use mockall::automock;

/// A remote tabular store that can list a whole collection.
///
/// `Ok(None)` means the store answered with a null payload rather than an
/// empty array.
#[cfg_attr(test, automock)]
#[allow(async_fn_in_trait)]
pub trait CollectionSource {
    async fn select(&self, query: &CollectionQuery) -> FetchResult<Option<Vec<Value>>>;
}

/// Decode a successful response body into rows.
///
/// An empty body or a JSON `null` is a null payload; anything other than an
/// array of values is malformed.
pub fn decode_rows(body: &str) -> FetchResult<Option<Vec<Value>>> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    match serde_json::from_str::<Value>(body)? {
        Value::Null => Ok(None),
        Value::Array(rows) => Ok(Some(rows)),
        other => Err(FetchError::malformed(format!(
            "expected an array of rows, got {}",
            json_type(&other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;
    use serde_json::json;

    #[test]
    fn decode_rows_accepts_arrays() {
        let rows = decode_rows(r#"[{"id":"a"},{"id":"b"}]"#).unwrap().unwrap();
        assert_eq!(rows, vec![json!({"id": "a"}), json!({"id": "b"})]);
    }

    #[test]
    fn decode_rows_treats_null_and_empty_as_no_payload() {
        assert_eq!(decode_rows("null").unwrap(), None);
        assert_eq!(decode_rows("").unwrap(), None);
        assert_eq!(decode_rows("[]").unwrap(), Some(vec![]));
    }

    #[test]
    fn decode_rows_rejects_objects() {
        let err = decode_rows(r#"{"id":"a"}"#).unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Malformed);
        assert_eq!(err.message(), "expected an array of rows, got an object");
    }

    #[test]
    fn decode_rows_rejects_invalid_json() {
        let err = decode_rows("[{").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Malformed);
    }
}
