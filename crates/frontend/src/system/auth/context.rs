use contracts::system::auth::{TokenScope, TokenStore, UserInfo};
use leptos::prelude::*;

use super::storage::BrowserTokenStore;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Auth context provider component.
///
/// A token left in browser storage by a previous visit counts as signed in.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let restored = BrowserTokenStore.load();
    if restored.is_some() {
        log::debug!("session restored from browser storage");
    }
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: restored,
        user_info: None,
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Browser storage that also publishes the token to the auth state, so the
/// shell is unlocked as soon as the login flow stores it.
#[derive(Clone, Copy)]
pub struct SignalTokenStore {
    set_auth_state: WriteSignal<AuthState>,
}

impl SignalTokenStore {
    pub fn new(set_auth_state: WriteSignal<AuthState>) -> Self {
        Self { set_auth_state }
    }
}

impl TokenStore for SignalTokenStore {
    fn save(&self, scope: TokenScope, token: &str) {
        BrowserTokenStore.save(scope, token);
        let token = token.to_string();
        self.set_auth_state
            .update(|state| state.access_token = Some(token));
    }

    fn load(&self) -> Option<String> {
        BrowserTokenStore.load()
    }

    fn clear(&self) {
        BrowserTokenStore.clear();
        self.set_auth_state.set(AuthState::default());
    }
}

/// Forgets the token in both storage scopes and in memory.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    SignalTokenStore::new(set_auth_state).clear();
    log::info!("signed out");
}
