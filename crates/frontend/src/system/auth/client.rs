use async_trait::async_trait;
use contracts::system::auth::{AuthError, AuthService, DemoAuthService, LoginRequest, UserInfo};

use super::api::HttpAuthService;
use crate::shared::config::{auth_mode, AuthMode};

/// Auth service selected by `OHADA_AUTH_MODE`.
pub enum AuthClient {
    Demo(DemoAuthService),
    Http(HttpAuthService),
}

impl AuthClient {
    pub fn from_config() -> Self {
        match auth_mode() {
            AuthMode::Demo => AuthClient::Demo(DemoAuthService::default()),
            AuthMode::Remote => AuthClient::Http(HttpAuthService::new()),
        }
    }

    /// Signed-in user after a successful login. The demo service knows
    /// nothing but the e-mail address.
    pub fn current_user(&self, email: &str) -> UserInfo {
        let known = match self {
            AuthClient::Http(http) => http.user_info(),
            AuthClient::Demo(_) => None,
        };
        known.unwrap_or_else(|| UserInfo {
            id: email.to_string(),
            email: email.to_string(),
            full_name: None,
            is_admin: matches!(self, AuthClient::Demo(_)),
        })
    }
}

#[async_trait(?Send)]
impl AuthService for AuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<(), AuthError> {
        match self {
            AuthClient::Demo(demo) => demo.login(request).await,
            AuthClient::Http(http) => http.login(request).await,
        }
    }

    fn get_token(&self) -> Option<String> {
        match self {
            AuthClient::Demo(demo) => demo.get_token(),
            AuthClient::Http(http) => http.get_token(),
        }
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AuthError> {
        match self {
            AuthClient::Demo(demo) => demo.reset_password(token, new_password).await,
            AuthClient::Http(http) => http.reset_password(token, new_password).await,
        }
    }
}
