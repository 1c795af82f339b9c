use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::BrowserStore;
use crate::hooks::use_auth;

/// Email and password sign-in
#[component]
pub fn Auth() -> impl IntoView {
    let auth = use_auth();
    let store = use_context::<BrowserStore>();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let Some(store) = store.clone() else {
            set_error.set(Some("Backend store is not configured".to_string()));
            return;
        };

        set_submitting.set(true);
        set_error.set(None);

        let navigate = navigate.clone();
        let email = email.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            match auth.sign_in(&store, email, password).await {
                Ok(()) => navigate("/", Default::default()),
                Err(e) => {
                    web_sys::console::log_1(&format!("Sign in failed: {}", e).into());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-background px-4">
            <div class="w-full max-w-md rounded-lg border border-border bg-card p-8">
                <h1 class="text-2xl font-bold text-foreground mb-2">"Welcome back"</h1>
                <p class="text-muted-foreground mb-6">
                    "Sign in to book destinations and events"
                </p>

                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label class="block text-sm mb-1" for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            required
                            class="w-full px-3 py-2 rounded-md border border-border bg-background"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm mb-1" for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            required
                            class="w-full px-3 py-2 rounded-md border border-border bg-background"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    {move || {
                        error
                            .get()
                            .map(|message| {
                                view! { <p class="text-sm text-destructive">{message}</p> }
                            })
                    }}

                    <button
                        type="submit"
                        class="w-full px-4 py-2 rounded-md font-medium bg-eco text-eco-foreground hover:bg-eco/90 transition-colors disabled:opacity-50"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <A href="/" attr:class="block mt-6 text-sm text-center text-muted-foreground hover:text-eco">
                    "Back to home"
                </A>
            </div>
        </div>
    }
}
