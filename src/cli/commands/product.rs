use tabled::Tabled;
use tokio_util::sync::CancellationToken;

use super::list_collection;
use crate::cli::error::CliResult;
use crate::cli::utils::{format_optional, truncate_with_ellipsis};
use crate::models::{Product, format_rupees};
use crate::store::CollectionSource;

#[derive(Tabled)]
pub struct ProductDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Stock")]
    stock: String,
    #[tabled(rename = "Artisan")]
    artisan: String,
}

fn stock_label(product: &Product) -> String {
    let count = format_optional(product.stock_quantity);
    if product.is_out_of_stock() {
        "Out of Stock".to_string()
    } else if product.is_low_stock() {
        format!("{} (Low Stock)", count)
    } else {
        count
    }
}

impl From<&Product> for ProductDisplay {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: truncate_with_ellipsis(&product.name, 40),
            category: product.category.clone(),
            price: format_rupees(product.price),
            rating: format_optional(product.rating),
            stock: stock_label(product),
            artisan: format!("By {}, {}", product.artisan_label(), product.village_label()),
        }
    }
}

/// List marketplace products in store order
pub async fn list_products<S: CollectionSource>(
    store: &S,
    token: &CancellationToken,
    format: &str,
) -> CliResult<Option<String>> {
    list_collection::<Product, ProductDisplay, S>(store, token, format).await
}
