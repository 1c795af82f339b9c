use leptos::prelude::*;
use thaw::*;

use jharkhand_tourism::models::{PRODUCT_PLACEHOLDER_IMAGE, Product, format_rupees, or_empty};

use crate::components::section::{
    ErrorBanner, FilterButtons, SectionHeader, SkeletonGrid,
};
use crate::hooks::{UseCollectionReturn, use_products};

const FILTERS: &[&str] = &[
    "All Products",
    "Art & Crafts",
    "Jewelry",
    "Home Decor",
    "Textiles",
    "Pottery",
];

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let out_of_stock = product.is_out_of_stock();

    view! {
        <div class="group overflow-hidden rounded-lg border border-border bg-card hover:shadow-xl transition-all duration-300">
            <div class="relative overflow-hidden">
                <img
                    src=product.image_or(PRODUCT_PLACEHOLDER_IMAGE).to_string()
                    alt=product.name.clone()
                    class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-500"
                />
                <div class="absolute top-4 left-4">
                    <Badge color=BadgeColor::Brand>{product.category.clone()}</Badge>
                </div>
                {product
                    .is_low_stock()
                    .then(|| {
                        view! {
                            <div class="absolute top-4 right-4">
                                <Badge color=BadgeColor::Danger>"Low Stock"</Badge>
                            </div>
                        }
                    })}
            </div>

            <div class="p-6">
                <h3 class="text-lg font-semibold group-hover:text-primary transition-colors">
                    {product.name.clone()}
                </h3>
                <p class="text-sm text-muted-foreground mt-2">{product.description.clone()}</p>
            </div>

            <div class="px-6 pb-6 space-y-4">
                <div class="text-sm text-muted-foreground">
                    <p>"by " {product.artisan_label().to_string()}</p>
                    <p>{product.village_label().to_string()}</p>
                </div>

                <div class="flex items-center justify-between">
                    <span class="text-xl font-bold text-primary">{format_rupees(product.price)}</span>
                    <span class="text-sm">
                        "★ " {or_empty(product.rating)}
                        <span class="text-muted-foreground">
                            " (Stock: " {or_empty(product.stock_quantity)} ")"
                        </span>
                    </span>
                </div>

                <button
                    class="w-full px-4 py-2 rounded-md font-medium bg-primary text-primary-foreground hover:bg-primary/90 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=out_of_stock
                >
                    {if out_of_stock { "Out of Stock" } else { "Add to Cart" }}
                </button>
            </div>
        </div>
    }
}

/// Artisan products in backend order
#[component]
pub fn LocalMarketplace() -> impl IntoView {
    let UseCollectionReturn {
        items,
        loading,
        error,
    } = use_products();

    view! {
        <section id="marketplace" class="py-20 px-4 bg-gradient-to-b from-muted/20 to-background">
            <div class="max-w-7xl mx-auto">
                {move || {
                    if let Some(message) = error.get() {
                        return view! { <ErrorBanner what="products" message/> }.into_any();
                    }

                    view! {
                        <SectionHeader
                            badge="Local Marketplace"
                            title="Authentic Tribal"
                            accent="Handicrafts"
                            gradient="from-primary to-eco"
                            blurb="Support local artisans and take home a piece of living tradition."
                        />
                        <FilterButtons labels=FILTERS/>
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8">
                            {move || {
                                if loading.get() {
                                    view! { <SkeletonGrid/> }.into_any()
                                } else {
                                    items
                                        .get()
                                        .into_iter()
                                        .map(|product| view! { <ProductCard product/> })
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
