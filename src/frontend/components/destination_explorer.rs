use leptos::prelude::*;
use thaw::*;

use jharkhand_tourism::models::{DESTINATION_PLACEHOLDER_IMAGE, Destination, format_rupees, or_empty};

use crate::components::section::{
    ErrorBanner, FilterButtons, HighlightBadges, SectionHeader, SkeletonGrid,
};
use crate::hooks::{UseCollectionReturn, use_destinations};

const FILTERS: &[&str] = &[
    "All Destinations",
    "Eco Tourism",
    "Cultural Sites",
    "Adventure",
    "Wildlife",
];

#[component]
pub fn DestinationCard(destination: Destination) -> impl IntoView {
    let badge_color = if destination.category.is_eco() {
        BadgeColor::Success
    } else {
        BadgeColor::Brand
    };

    view! {
        <div class="group overflow-hidden rounded-lg border border-border bg-card hover:shadow-xl transition-all duration-300">
            <div class="relative overflow-hidden">
                <img
                    src=destination.image_or(DESTINATION_PLACEHOLDER_IMAGE).to_string()
                    alt=destination.name.clone()
                    class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-500"
                />
                <div class="absolute top-4 left-4">
                    <Badge color=badge_color>{destination.category.label().to_string()}</Badge>
                </div>
                <div class="absolute top-4 right-4 bg-black/50 rounded-full px-2 py-1 text-white text-sm">
                    "★ " {or_empty(destination.rating)}
                </div>
            </div>

            <div class="p-6">
                <h3 class="text-xl font-semibold group-hover:text-eco transition-colors">
                    {destination.name.clone()}
                </h3>
                <p class="text-muted-foreground mt-2">{destination.description.clone()}</p>
            </div>

            <div class="px-6 pb-6 space-y-4">
                <div class="flex items-center justify-between text-sm text-muted-foreground">
                    <span>{destination.duration_label().to_string()}</span>
                    <span>{or_empty(destination.visitor_count)} "+ visited"</span>
                </div>

                <HighlightBadges highlights=destination.highlights.clone()/>

                <div class="flex items-center justify-between pt-4 border-t border-border">
                    <div>
                        <span class="text-2xl font-bold text-eco">
                            {format_rupees(destination.price_or_zero())}
                        </span>
                        <span class="text-sm text-muted-foreground">" /person"</span>
                    </div>
                    <button class="px-4 py-2 rounded-md font-medium bg-eco text-eco-foreground hover:bg-eco/90 transition-colors">
                        "Book Now"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Destination grid, newest first
#[component]
pub fn DestinationExplorer() -> impl IntoView {
    let UseCollectionReturn {
        items,
        loading,
        error,
    } = use_destinations();

    view! {
        <section id="destinations" class="py-20 px-4 bg-gradient-to-b from-background to-muted/20">
            <div class="max-w-7xl mx-auto">
                {move || {
                    if let Some(message) = error.get() {
                        return view! { <ErrorBanner what="destinations" message/> }.into_any();
                    }

                    view! {
                        <SectionHeader
                            badge="Explore Destinations"
                            title="Discover Jharkhand's"
                            accent="Hidden Treasures"
                            gradient="from-eco to-cultural"
                            blurb="From cascading waterfalls to ancient temples, explore the diverse landscapes and rich heritage of the state."
                        />
                        <FilterButtons labels=FILTERS/>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            {move || {
                                if loading.get() {
                                    view! { <SkeletonGrid/> }.into_any()
                                } else {
                                    items
                                        .get()
                                        .into_iter()
                                        .map(|destination| view! { <DestinationCard destination/> })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </section>
    }
}
