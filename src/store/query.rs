//! Read query configuration.
//!
//! A [`CollectionQuery`] names a collection and how it should be ordered.
//! It never carries filters or limits: every read returns the whole
//! collection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

impl Order {
    /// PostgREST form, e.g. `created_at.desc`.
    pub fn to_param(&self) -> String {
        format!("{}.{}", self.column, self.direction.as_str())
    }
}

/// Select-all query against one collection.
///
/// # Example
/// ```
/// use jharkhand_tourism::store::CollectionQuery;
///
/// let query = CollectionQuery::new("events").ascending("event_date");
/// assert_eq!(query.query_string(), "select=*&order=event_date.asc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionQuery {
    collection: String,
    order: Option<Order>,
}

impl CollectionQuery {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            order: None,
        }
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order = Some(Order {
            column: column.into(),
            direction,
        });
        self
    }

    pub fn ascending(self, column: impl Into<String>) -> Self {
        self.order_by(column, Direction::Ascending)
    }

    pub fn descending(self, column: impl Into<String>) -> Self {
        self.order_by(column, Direction::Descending)
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    /// Query parameters in request order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("select", "*".to_string())];
        if let Some(order) = &self.order {
            params.push(("order", order.to_param()));
        }
        params
    }

    pub fn query_string(&self) -> String {
        self.params()
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&")
    }
}
