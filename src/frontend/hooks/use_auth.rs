use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use leptos::task::spawn_local;

use jharkhand_tourism::error::FetchResult;
use jharkhand_tourism::models::{AuthSession, AuthUser};

use crate::api::{BrowserStore, auth};

const SESSION_KEY: &str = "jht.auth.session";

/// Current session, shared through context
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<AuthSession>>,
}

impl AuthContext {
    pub fn user(&self) -> Option<AuthUser> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    /// Sign in with email and password, persisting the session on success
    pub async fn sign_in(
        &self,
        store: &BrowserStore,
        email: String,
        password: String,
    ) -> FetchResult<()> {
        let session = auth::sign_in(store, email, password).await?;
        if let Err(e) = LocalStorage::set(SESSION_KEY, &session) {
            web_sys::console::log_1(&format!("Failed to persist session: {}", e).into());
        }
        self.session.set(Some(session));
        Ok(())
    }

    /// Forget the session locally and revoke it in the background
    pub fn sign_out(&self, store: Option<BrowserStore>) {
        let Some(session) = self.session.get_untracked() else {
            return;
        };

        LocalStorage::delete(SESSION_KEY);
        self.session.set(None);

        if let Some(store) = store {
            spawn_local(async move {
                if let Err(e) = auth::sign_out(&store, &session.access_token).await {
                    web_sys::console::log_1(&format!("Sign out failed: {}", e).into());
                }
            });
        }
    }
}

/// Restore any stored session and provide it to the tree
pub fn provide_auth() {
    let stored = LocalStorage::get::<AuthSession>(SESSION_KEY).ok();
    provide_context(AuthContext {
        session: RwSignal::new(stored),
    });
}

/// Access the auth context provided by [`provide_auth`]
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
