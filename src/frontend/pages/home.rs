use leptos::prelude::*;

use crate::components::{DestinationExplorer, EventCalendar, LocalMarketplace, Navigation};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background">
            <Navigation/>
            <DestinationExplorer/>
            <EventCalendar/>
            <LocalMarketplace/>
        </div>
    }
}
