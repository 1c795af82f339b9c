pub mod destination;
pub mod event;
pub mod product;

use serde::Serialize;
use tabled::{Table, Tabled};
use tokio_util::sync::CancellationToken;

use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::apply_table_style;
use crate::listing::scope::load_scoped;
use crate::listing::{Listing, Resource};
use crate::store::CollectionSource;

/// Mount a listing of `T`, load it inside `token`'s scope and render it.
///
/// Returns `Ok(None)` when the scope was cancelled before the read settled.
pub async fn list_collection<T, D, S>(
    store: &S,
    token: &CancellationToken,
    format: &str,
) -> CliResult<Option<String>>
where
    T: Resource + Serialize,
    D: Tabled + for<'a> From<&'a T>,
    S: CollectionSource,
{
    let mut listing = Listing::<T>::mount();
    let Some(state) = load_scoped(&mut listing, store, token).await else {
        return Ok(None);
    };

    if let Some(err) = &state.error {
        return Err(CliError::Fetch {
            collection: T::COLLECTION,
            source: err.clone(),
        });
    }

    match format {
        "json" => Ok(Some(serde_json::to_string_pretty(&state.items)?)),
        _ => Ok(Some(format_table::<T, D>(&state.items))),
    }
}

fn format_table<T, D>(items: &[T]) -> String
where
    T: Resource,
    D: Tabled + for<'a> From<&'a T>,
{
    if items.is_empty() {
        return format!("No {} found.", T::COLLECTION);
    }

    let rows: Vec<D> = items.iter().map(|item| D::from(item)).collect();
    let mut table = Table::new(rows);
    apply_table_style(&mut table);
    table.to_string()
}
