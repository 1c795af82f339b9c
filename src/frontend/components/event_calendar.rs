use leptos::prelude::*;
use thaw::*;

use jharkhand_tourism::models::{EVENT_PLACEHOLDER_IMAGE, Event, format_rupees, or_empty};

use crate::components::section::{
    ErrorBanner, FilterButtons, HighlightBadges, SectionHeader, SkeletonGrid,
};
use crate::hooks::{UseCollectionReturn, use_events};

const FILTERS: &[&str] = &[
    "Upcoming Events",
    "Monthly View",
    "Cultural Festivals",
    "Workshops",
    "Educational",
];

/// "2025-04-01" as "Tue, 1 April 2025"; anything unparseable is shown as is
fn format_event_date(raw: &str) -> String {
    let date = web_sys::js_sys::Date::new(&raw.into());
    if date.get_time().is_nan() {
        return raw.to_string();
    }
    let options = web_sys::js_sys::Object::new();
    for (key, value) in [
        ("weekday", "short"),
        ("day", "numeric"),
        ("month", "long"),
        ("year", "numeric"),
    ] {
        let _ = web_sys::js_sys::Reflect::set(&options, &key.into(), &value.into());
    }
    date.to_locale_date_string("en-IN", &options).into()
}

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let price = if event.is_free() {
        "Free Entry".to_string()
    } else {
        event.price.map(format_rupees).unwrap_or_default()
    };
    let action = if event.is_free() {
        "Register Free"
    } else {
        "Book Now"
    };

    view! {
        <div class="group overflow-hidden rounded-lg border border-border bg-card hover:shadow-xl transition-all duration-300">
            <div class="relative overflow-hidden">
                <img
                    src=event.image_or(EVENT_PLACEHOLDER_IMAGE).to_string()
                    alt=event.name.clone()
                    class="w-full h-56 object-cover group-hover:scale-110 transition-transform duration-500"
                />
                <div class="absolute top-4 left-4">
                    <Badge color=BadgeColor::Brand>{event.category.clone()}</Badge>
                </div>
                <div class="absolute bottom-4 right-4 bg-black/60 rounded px-2 py-1 text-white text-sm font-semibold">
                    {price}
                </div>
            </div>

            <div class="p-6">
                <h3 class="text-xl font-semibold group-hover:text-cultural transition-colors">
                    {event.name.clone()}
                </h3>
                <p class="text-muted-foreground mt-2">{event.description.clone()}</p>
            </div>

            <div class="px-6 pb-6 space-y-4">
                <div class="space-y-1 text-sm text-muted-foreground">
                    <p>{format_event_date(&event.event_date)}</p>
                    <p>{event.time_label().to_string()}</p>
                    <p>{event.location.clone()}</p>
                    <p>{or_empty(event.expected_attendees)} " expected"</p>
                </div>

                <HighlightBadges highlights=event.highlights.clone()/>

                <button class="w-full px-4 py-2 rounded-md font-medium bg-primary text-primary-foreground hover:bg-primary/90 transition-colors">{action}</button>
            </div>
        </div>
    }
}

/// Upcoming events, soonest first
#[component]
pub fn EventCalendar() -> impl IntoView {
    let UseCollectionReturn {
        items,
        loading,
        error,
    } = use_events();

    view! {
        <section id="events" class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                {move || {
                    if let Some(message) = error.get() {
                        return view! { <ErrorBanner what="events" message/> }.into_any();
                    }

                    view! {
                        <SectionHeader
                            badge="Cultural Calendar"
                            title="Festivals &"
                            accent="Cultural Events"
                            gradient="from-cultural to-primary"
                            blurb="Join the celebrations of tribal heritage, music and dance throughout the year."
                        />
                        <FilterButtons labels=FILTERS/>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            {move || {
                                if loading.get() {
                                    view! { <SkeletonGrid image_height="h-56"/> }.into_any()
                                } else {
                                    items
                                        .get()
                                        .into_iter()
                                        .map(|event| view! { <EventCard event/> })
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
