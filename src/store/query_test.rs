//! Tests for query rendering.

use crate::store::query::*;

#[test]
fn unordered_query_selects_everything() {
    let query = CollectionQuery::new("products");
    assert_eq!(query.collection(), "products");
    assert_eq!(query.order(), None);
    assert_eq!(query.params(), vec![("select", "*".to_string())]);
    assert_eq!(query.query_string(), "select=*");
}

#[test]
fn descending_order_renders_postgrest_param() {
    let query = CollectionQuery::new("destinations").descending("created_at");
    assert_eq!(query.query_string(), "select=*&order=created_at.desc");
}

#[test]
fn ascending_order_renders_postgrest_param() {
    let query = CollectionQuery::new("events").ascending("event_date");
    assert_eq!(
        query.params(),
        vec![
            ("select", "*".to_string()),
            ("order", "event_date.asc".to_string())
        ]
    );
}

#[test]
fn later_order_replaces_earlier_one() {
    let query = CollectionQuery::new("events")
        .ascending("event_date")
        .order_by("name", Direction::Descending);
    assert_eq!(query.order().unwrap().to_param(), "name.desc");
}

#[test]
fn direction_serializes_in_postgrest_form() {
    assert_eq!(serde_json::to_string(&Direction::Ascending).unwrap(), "\"asc\"");
    assert_eq!(serde_json::to_string(&Direction::Descending).unwrap(), "\"desc\"");
}
