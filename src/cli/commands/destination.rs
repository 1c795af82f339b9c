use tabled::Tabled;
use tokio_util::sync::CancellationToken;

use super::list_collection;
use crate::cli::error::CliResult;
use crate::cli::utils::{format_highlights, format_optional, truncate_with_ellipsis};
use crate::models::{Destination, format_rupees};
use crate::store::CollectionSource;

#[derive(Tabled)]
pub struct DestinationDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Visited")]
    visitors: String,
    #[tabled(rename = "Highlights")]
    highlights: String,
}

impl From<&Destination> for DestinationDisplay {
    fn from(destination: &Destination) -> Self {
        Self {
            id: destination.id.clone(),
            name: truncate_with_ellipsis(&destination.name, 40),
            category: destination.category.label().to_string(),
            rating: format_optional(destination.rating),
            duration: destination.duration_label().to_string(),
            price: format_rupees(destination.price_or_zero()),
            visitors: format_optional(destination.visitor_count.map(|n| format!("{}+", n))),
            highlights: truncate_with_ellipsis(
                &format_highlights(destination.highlights.as_ref()),
                50,
            ),
        }
    }
}

/// List destinations, newest first
pub async fn list_destinations<S: CollectionSource>(
    store: &S,
    token: &CancellationToken,
    format: &str,
) -> CliResult<Option<String>> {
    list_collection::<Destination, DestinationDisplay, S>(store, token, format).await
}
