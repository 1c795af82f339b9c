//! Rows read from the backend, plus the auth session shape.
//!
//! Field nullability follows the backend schema. Display defaults (placeholder
//! images, "1-2 days", "TBA", ...) belong to the rendering layers and are
//! exposed here as helpers so the CLI and the web UI agree on them.

use serde::{Deserialize, Serialize};

pub const DESTINATION_PLACEHOLDER_IMAGE: &str = "/assets/jharkhand-waterfall.jpg";
pub const EVENT_PLACEHOLDER_IMAGE: &str = "/assets/cultural-festival.jpg";
pub const PRODUCT_PLACEHOLDER_IMAGE: &str = "/assets/handicrafts.jpg";

pub const DEFAULT_DURATION: &str = "1-2 days";
pub const DEFAULT_EVENT_TIME: &str = "TBA";
pub const DEFAULT_ARTISAN: &str = "Local Artisan";
pub const DEFAULT_VILLAGE: &str = "Jharkhand";

/// Stock below this shows a "Low Stock" badge.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// `₹1500` for whole amounts, `₹99.50` otherwise.
pub fn format_rupees(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("₹{:.0}", amount)
    } else {
        format!("₹{:.2}", amount)
    }
}

/// A nullable field rendered as-is: the value itself, or nothing.
pub fn or_empty<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Destination category as stored in the `category` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationCategory {
    Eco,
    Cultural,
    Adventure,
    #[serde(untagged)]
    Other(String),
}

impl DestinationCategory {
    pub fn label(&self) -> &str {
        match self {
            DestinationCategory::Eco => "Eco Tourism",
            DestinationCategory::Cultural => "Cultural",
            // Anything that is neither eco nor cultural renders as adventure.
            DestinationCategory::Adventure | DestinationCategory::Other(_) => "Adventure",
        }
    }

    pub fn is_eco(&self) -> bool {
        matches!(self, DestinationCategory::Eco)
    }
}

/// Row of the `destinations` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub category: DestinationCategory,
    pub rating: Option<f64>,
    pub duration: Option<String>,
    pub price: Option<f64>,
    pub visitor_count: Option<i64>,
    pub highlights: Option<Vec<String>>,
    pub location: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Destination {
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image_url.as_deref().unwrap_or(placeholder)
    }

    pub fn duration_label(&self) -> &str {
        self.duration.as_deref().unwrap_or(DEFAULT_DURATION)
    }

    /// Price per person; a missing price is shown as zero.
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

/// Row of the `events` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub event_date: String,
    pub event_time: Option<String>,
    pub location: String,
    pub category: String,
    pub price: Option<f64>,
    pub expected_attendees: Option<i64>,
    pub highlights: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: String,
}

impl Event {
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image_url.as_deref().unwrap_or(placeholder)
    }

    pub fn time_label(&self) -> &str {
        self.event_time.as_deref().unwrap_or(DEFAULT_EVENT_TIME)
    }

    /// Only an explicit zero price means free entry.
    pub fn is_free(&self) -> bool {
        self.price == Some(0.0)
    }
}

/// Row of the `products` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub category: String,
    pub price: f64,
    pub rating: Option<f64>,
    pub stock_quantity: Option<i64>,
    pub artisan_name: Option<String>,
    pub village: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Product {
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image_url.as_deref().unwrap_or(placeholder)
    }

    pub fn artisan_label(&self) -> &str {
        self.artisan_name.as_deref().unwrap_or(DEFAULT_ARTISAN)
    }

    pub fn village_label(&self) -> &str {
        self.village.as_deref().unwrap_or(DEFAULT_VILLAGE)
    }

    /// A missing stock count compares as zero here, so it is flagged low.
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity.unwrap_or(0) < LOW_STOCK_THRESHOLD
    }

    /// Out of stock only when the backend says exactly zero.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock_quantity == Some(0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserMetadata {
    pub full_name: Option<String>,
}

/// Signed-in user as returned by the auth endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl AuthUser {
    /// Full name if set, otherwise email, otherwise the user id.
    pub fn display_name(&self) -> &str {
        self.user_metadata
            .full_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

/// Credentials for the password grant.
#[derive(Debug, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}
