use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use thaw::*;

use crate::api::BrowserStore;
use crate::hooks::provide_auth;
use crate::pages::{Auth, Home};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(BrowserStore::from_build_env());
    provide_auth();

    let theme = RwSignal::new(Theme::light());

    view! {
        <ConfigProvider theme>
            <Title text="Jharkhand Tourism"/>
            <Router>
                <Routes fallback=|| view! { <p class="p-6">"Page not found"</p> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/auth") view=Auth/>
                </Routes>
            </Router>
        </ConfigProvider>
    }
}
