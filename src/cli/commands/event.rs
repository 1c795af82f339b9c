use tabled::Tabled;
use tokio_util::sync::CancellationToken;

use super::list_collection;
use crate::cli::error::CliResult;
use crate::cli::utils::{
    format_event_date, format_highlights, format_optional, truncate_with_ellipsis,
};
use crate::models::{Event, format_rupees};
use crate::store::CollectionSource;

#[derive(Tabled)]
pub struct EventDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Expected")]
    expected: String,
    #[tabled(rename = "Highlights")]
    highlights: String,
}

impl From<&Event> for EventDisplay {
    fn from(event: &Event) -> Self {
        let price = if event.is_free() {
            "Free Entry".to_string()
        } else {
            format_optional(event.price.map(format_rupees))
        };

        Self {
            id: event.id.clone(),
            name: truncate_with_ellipsis(&event.name, 40),
            date: format_event_date(&event.event_date),
            time: event.time_label().to_string(),
            location: event.location.clone(),
            category: event.category.clone(),
            price,
            expected: format_optional(event.expected_attendees),
            highlights: truncate_with_ellipsis(&format_highlights(event.highlights.as_ref()), 50),
        }
    }
}

/// List events, soonest first
pub async fn list_events<S: CollectionSource>(
    store: &S,
    token: &CancellationToken,
    format: &str,
) -> CliResult<Option<String>> {
    list_collection::<Event, EventDisplay, S>(store, token, format).await
}
