use super::{AuthError, LoginRequest, TokenScope};
use async_trait::async_trait;

/// External authentication service.
#[async_trait(?Send)]
pub trait AuthService {
    async fn login(&self, request: &LoginRequest) -> Result<(), AuthError>;

    /// Token obtained by the last successful login.
    fn get_token(&self) -> Option<String>;

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AuthError>;
}

/// Browser-side token persistence, split into two scopes.
pub trait TokenStore {
    /// Writes `token` into `scope` and removes it from the other scope.
    fn save(&self, scope: TokenScope, token: &str);

    /// Session scope first, then persistent scope.
    fn load(&self) -> Option<String>;

    fn clear(&self);
}

/// Client-side router.
pub trait Navigator {
    fn navigate(&self, path: &str);
}
