use leptos::prelude::*;
use thaw::*;

/// Number of placeholder cards shown while a collection loads
pub const SKELETON_CARDS: usize = 6;

/// Centered header shared by the listing sections
#[component]
pub fn SectionHeader(
    badge: &'static str,
    title: &'static str,
    accent: &'static str,
    /// Tailwind gradient classes for the accent line
    gradient: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <div class="mb-4">
                <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Brand>
                    {badge}
                </Badge>
            </div>
            <h2 class="text-4xl md:text-5xl font-bold text-foreground mb-6">
                {title}
                <span class=format!(
                    "block text-transparent bg-gradient-to-r {} bg-clip-text",
                    gradient,
                )>{accent}</span>
            </h2>
            <p class="text-xl text-muted-foreground max-w-2xl mx-auto">{blurb}</p>
        </div>
    }
}

/// Plain-text failure line that replaces a whole section body
#[component]
pub fn ErrorBanner(what: &'static str, message: String) -> impl IntoView {
    view! {
        <div class="text-center">
            <p class="text-destructive">"Error loading " {what} ": " {message}</p>
        </div>
    }
}

/// Visual-only filter row; the buttons do not filter anything
#[component]
pub fn FilterButtons(labels: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center gap-4 mb-12">
            {labels
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    let class = if index == 0 {
                        "px-3 py-1 rounded-md text-sm bg-eco text-eco-foreground"
                    } else {
                        "px-3 py-1 rounded-md text-sm border border-border"
                    };
                    view! { <button class=class>{*label}</button> }
                })
                .collect_view()}
        </div>
    }
}

/// Grid of pulsing placeholder cards
#[component]
pub fn SkeletonGrid(
    /// Height class of the image placeholder
    #[prop(optional)]
    image_height: Option<&'static str>,
) -> impl IntoView {
    let image_class = format!(
        "w-full {} bg-muted animate-pulse",
        image_height.unwrap_or("h-48"),
    );

    (0..SKELETON_CARDS)
        .map(|_| {
            view! {
                <div class="overflow-hidden rounded-lg border border-border bg-card">
                    <div class=image_class.clone()></div>
                    <div class="p-6 space-y-2">
                        <div class="h-6 w-3/4 bg-muted rounded animate-pulse"></div>
                        <div class="h-4 w-full bg-muted rounded animate-pulse"></div>
                        <div class="h-4 w-2/3 bg-muted rounded animate-pulse"></div>
                    </div>
                    <div class="px-6 pb-6 flex flex-wrap gap-2">
                        <div class="h-6 w-20 bg-muted rounded animate-pulse"></div>
                        <div class="h-6 w-16 bg-muted rounded animate-pulse"></div>
                        <div class="h-6 w-24 bg-muted rounded animate-pulse"></div>
                    </div>
                    <div class="px-6 pb-6">
                        <div class="h-10 w-full bg-muted rounded animate-pulse"></div>
                    </div>
                </div>
            }
        })
        .collect_view()
}

/// Outline badges for a highlight list
///
/// A null list renders nothing; the hook passes it through unchanged.
#[component]
pub fn HighlightBadges(highlights: Option<Vec<String>>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {highlights
                .into_iter()
                .flatten()
                .map(|highlight| {
                    view! {
                        <Badge
                            size=BadgeSize::Small
                            appearance=BadgeAppearance::Outline
                            color=BadgeColor::Brand
                        >
                            {highlight}
                        </Badge>
                    }
                })
                .collect_view()}
        </div>
    }
}
