use async_trait::async_trait;
use contracts::system::auth::{
    AuthError, AuthService, LoginRequest, LoginResponse, ResetPasswordRequest, UserInfo,
};
use gloo_net::http::{Request, Response};
use std::cell::RefCell;

use crate::shared::api_utils::api_base;

/// External auth service reached over HTTP/JSON.
pub struct HttpAuthService {
    base: String,
    session: RefCell<Option<LoginResponse>>,
}

impl HttpAuthService {
    pub fn new() -> Self {
        Self::with_base(api_base())
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            session: RefCell::new(None),
        }
    }

    /// User returned by the last successful login.
    pub fn user_info(&self) -> Option<UserInfo> {
        self.session.borrow().as_ref().map(|s| s.user.clone())
    }
}

impl Default for HttpAuthService {
    fn default() -> Self {
        Self::new()
    }
}

/// Message of a non-2xx response: the `message` field of a JSON body when
/// there is one, the status code otherwise.
async fn rejection_message(response: Response) -> String {
    let status = response.status();
    match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Erreur {}", status)),
        Err(_) => format!("Erreur {}", status),
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    async fn login(&self, request: &LoginRequest) -> Result<(), AuthError> {
        let response = Request::post(&format!("{}/api/auth/login", self.base))
            .json(request)
            .map_err(|e| AuthError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        match response.status() {
            401 | 403 => return Err(AuthError::InvalidCredentials),
            _ if !response.ok() => return Err(AuthError::Rejected(rejection_message(response).await)),
            _ => {}
        }

        let body = response
            .json::<LoginResponse>()
            .await
            .map_err(|e| AuthError::Transport(format!("Failed to parse response: {}", e)))?;
        *self.session.borrow_mut() = Some(body);
        Ok(())
    }

    fn get_token(&self) -> Option<String> {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AuthError> {
        let request = ResetPasswordRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };

        let response = Request::post(&format!("{}/api/auth/reset-password", self.base))
            .json(&request)
            .map_err(|e| AuthError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        match response.status() {
            400 | 404 | 410 => Err(AuthError::InvalidResetToken),
            _ if !response.ok() => Err(AuthError::Rejected(rejection_message(response).await)),
            _ => Ok(()),
        }
    }
}
