use leptos::prelude::*;
use leptos_router::components::A;

use crate::api::BrowserStore;
use crate::hooks::use_auth;

const LINKS: &[(&str, &str)] = &[
    ("Destinations", "#destinations"),
    ("Experiences", "#experiences"),
    ("Marketplace", "#marketplace"),
    ("Events", "#events"),
    ("Culture", "#culture"),
];

/// Top bar with section links and the sign-in state
#[component]
pub fn Navigation() -> impl IntoView {
    let auth = use_auth();
    let store = use_context::<BrowserStore>();

    view! {
        <nav class="sticky top-0 z-50 bg-card/80 backdrop-blur-md border-b border-border">
            <div class="max-w-7xl mx-auto flex justify-between items-center px-4 h-16">
                <A href="/" attr:class="text-2xl font-bold bg-gradient-to-r from-eco to-cultural bg-clip-text text-transparent">
                    "Jharkhand Tourism"
                </A>
                <div class="hidden md:flex items-center gap-6">
                    {LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a href=*href class="text-foreground hover:text-eco transition-colors">
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-3">
                    {move || match auth.user() {
                        Some(user) => {
                            let store = store.clone();
                            view! {
                                <span class="text-sm text-muted-foreground">
                                    "Welcome, " {user.display_name().to_string()}
                                </span>
                                <button
                                    class="px-3 py-1 rounded-md text-sm border border-border hover:bg-muted transition-colors"
                                    on:click=move |_| auth.sign_out(store.clone())
                                >
                                    "Sign Out"
                                </button>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <A href="/auth" attr:class="px-3 py-1 rounded-md text-sm bg-eco text-eco-foreground">
                                    "Sign In"
                                </A>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
