use super::service::AuthService;
use super::{AuthError, LoginRequest};
use async_trait::async_trait;
use std::cell::RefCell;
use uuid::Uuid;

pub const DEMO_EMAIL: &str = "admin@ohada.local";
pub const DEMO_PASSWORD: &str = "admin123";

/// In-process stand-in for the authentication service, used when no
/// remote service is configured.
#[derive(Debug)]
pub struct DemoAuthService {
    users: Vec<(String, String)>,
    token: RefCell<Option<String>>,
}

impl Default for DemoAuthService {
    fn default() -> Self {
        Self::new().with_user(DEMO_EMAIL, DEMO_PASSWORD)
    }
}

impl DemoAuthService {
    /// Service without any account; add some with [`Self::with_user`].
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            token: RefCell::new(None),
        }
    }

    pub fn with_user(mut self, email: &str, password: &str) -> Self {
        self.users.push((email.to_lowercase(), password.to_string()));
        self
    }
}

#[async_trait(?Send)]
impl AuthService for DemoAuthService {
    async fn login(&self, request: &LoginRequest) -> Result<(), AuthError> {
        let email = request.email.trim().to_lowercase();
        let known = self
            .users
            .iter()
            .any(|(e, p)| *e == email && *p == request.password);
        if !known {
            log::warn!("demo login refused for {}", email);
            return Err(AuthError::InvalidCredentials);
        }
        *self.token.borrow_mut() = Some(format!("demo-{}", Uuid::new_v4()));
        Ok(())
    }

    fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    async fn reset_password(&self, token: &str, _new_password: &str) -> Result<(), AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::InvalidResetToken);
        }
        log::info!("demo password reset accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_issues_token() {
        let auth = DemoAuthService::default();
        assert_eq!(auth.get_token(), None);
        let request = LoginRequest {
            email: "Admin@Ohada.local".into(),
            password: DEMO_PASSWORD.into(),
        };
        auth.login(&request).await.unwrap();
        assert!(auth.get_token().unwrap().starts_with("demo-"));
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let auth = DemoAuthService::default();
        let request = LoginRequest {
            email: DEMO_EMAIL.into(),
            password: "wrong-password".into(),
        };
        assert_eq!(auth.login(&request).await, Err(AuthError::InvalidCredentials));
        assert_eq!(auth.get_token(), None);
    }

    #[tokio::test]
    async fn test_reset_requires_token() {
        let auth = DemoAuthService::default();
        assert_eq!(
            auth.reset_password(" ", "secret1").await,
            Err(AuthError::InvalidResetToken)
        );
        assert!(auth.reset_password("tok", "secret1").await.is_ok());
    }
}
