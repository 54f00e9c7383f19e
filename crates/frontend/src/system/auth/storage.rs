use contracts::system::auth::{TokenScope, TokenStore};
use web_sys::{window, Storage};

const ACCESS_TOKEN_KEY: &str = "ohada_access_token";

fn get_session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

fn storage_for(scope: TokenScope) -> Option<Storage> {
    match scope {
        TokenScope::Session => get_session_storage(),
        TokenScope::Persistent => get_local_storage(),
    }
}

/// Session token in `sessionStorage` (default) or `localStorage`
/// ("remember me").
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn save(&self, scope: TokenScope, token: &str) {
        let other = match scope {
            TokenScope::Session => TokenScope::Persistent,
            TokenScope::Persistent => TokenScope::Session,
        };
        if let Some(storage) = storage_for(other) {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
        match storage_for(scope) {
            Some(storage) => {
                if let Err(e) = storage.set_item(ACCESS_TOKEN_KEY, token) {
                    log::warn!("could not store token ({:?}): {:?}", scope, e);
                }
            }
            None => log::warn!("{:?} storage unavailable, token kept in memory only", scope),
        }
    }

    fn load(&self) -> Option<String> {
        let from_session = get_session_storage().and_then(|s| s.get_item(ACCESS_TOKEN_KEY).ok()?);
        from_session.or_else(|| get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?)
    }

    fn clear(&self) {
        for storage in [get_session_storage(), get_local_storage()].into_iter().flatten() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
    }
}
