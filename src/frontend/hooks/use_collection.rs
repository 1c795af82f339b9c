use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos::task::spawn_local;

use jharkhand_tourism::error::FetchError;
use jharkhand_tourism::listing::{ListState, Resource, fetch_collection};
use jharkhand_tourism::models::{Destination, Event, Product};

use crate::api::BrowserStore;

/// Return type for use_collection hook
pub struct UseCollectionReturn<T: Send + Sync + 'static> {
    pub items: Signal<Vec<T>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

/// Hook that reads a whole collection once per mount
///
/// State starts as `{items: [], loading: true, error: None}` and settles
/// exactly once. A result arriving after the owning component unmounted
/// is dropped.
///
/// # Example
/// ```rust
/// let UseCollectionReturn { items, loading, error } = use_collection::<Event>();
///
/// view! {
///     <Show when=move || !loading.get() fallback=|| view! { <SkeletonGrid/> }>
///         ...
///     </Show>
/// }
/// ```
pub fn use_collection<T>() -> UseCollectionReturn<T>
where
    T: Resource + Clone + Send + Sync + 'static,
{
    let (state, set_state) = signal(ListState::<T>::pending());

    let unmounted = Arc::new(AtomicBool::new(false));
    on_cleanup({
        let unmounted = Arc::clone(&unmounted);
        move || unmounted.store(true, Ordering::Relaxed)
    });

    let store = use_context::<BrowserStore>();
    spawn_local(async move {
        let result = match store {
            Some(store) => fetch_collection::<T, _>(&store).await,
            None => Err(FetchError::unknown("backend store is not configured")),
        };

        if unmounted.load(Ordering::Relaxed) {
            web_sys::console::log_1(
                &format!("{} settled after unmount, discarding", T::COLLECTION).into(),
            );
            return;
        }

        let _ = set_state.try_update(|state| state.settle(result));
    });

    UseCollectionReturn {
        items: Signal::derive(move || state.with(|s| s.items.clone())),
        loading: Signal::derive(move || state.with(|s| s.loading)),
        error: Signal::derive(move || state.with(|s| s.error_message())),
    }
}

/// Destinations, newest first
pub fn use_destinations() -> UseCollectionReturn<Destination> {
    use_collection::<Destination>()
}

/// Events, soonest first
pub fn use_events() -> UseCollectionReturn<Event> {
    use_collection::<Event>()
}

pub fn use_products() -> UseCollectionReturn<Product> {
    use_collection::<Product>()
}
