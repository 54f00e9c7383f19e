//! Login and reset-password submission, independent of any UI toolkit.

use super::forms::{LoginForm, ResetPasswordForm};
use super::service::{AuthService, Navigator, TokenStore};
use super::AuthError;
use crate::shared::validation::FieldErrors;
use crate::system::paths;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// Blocked before reaching the auth service.
    Invalid(FieldErrors),
    /// Auth service failure, shown as a single banner message.
    Failed(String),
}

impl SubmitError {
    pub fn banner(&self) -> Option<&str> {
        match self {
            SubmitError::Failed(message) => Some(message),
            SubmitError::Invalid(_) => None,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitError::Invalid(errors) => Some(errors),
            SubmitError::Failed(_) => None,
        }
    }
}

impl From<AuthError> for SubmitError {
    fn from(err: AuthError) -> Self {
        SubmitError::Failed(err.to_string())
    }
}

/// Validates, authenticates, stores the token in the scope picked by
/// "remember me" and navigates to the dashboard.
pub async fn submit_login<A, S, N>(
    form: &LoginForm,
    auth: &A,
    store: &S,
    navigator: &N,
) -> Result<(), SubmitError>
where
    A: AuthService + ?Sized,
    S: TokenStore + ?Sized,
    N: Navigator + ?Sized,
{
    let request = form.validate().map_err(SubmitError::Invalid)?;
    auth.login(&request).await?;
    let token = auth.get_token().ok_or(AuthError::MissingToken)?;

    let scope = form.scope();
    store.save(scope, &token);
    log::info!("login succeeded for {} ({:?} token)", request.email, scope);

    navigator.navigate(paths::DASHBOARD);
    Ok(())
}

/// Validates, resets the password and returns to the login page.
pub async fn submit_reset_password<A, N>(
    form: &ResetPasswordForm,
    auth: &A,
    navigator: &N,
) -> Result<(), SubmitError>
where
    A: AuthService + ?Sized,
    N: Navigator + ?Sized,
{
    let request = form.validate().map_err(SubmitError::Invalid)?;
    auth.reset_password(&request.token, &request.new_password)
        .await?;
    log::info!("password reset completed");

    navigator.navigate(paths::LOGIN);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::{LoginRequest, TokenScope};
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;

    struct MockAuth {
        accept: bool,
        token: Option<String>,
        logged_in: RefCell<bool>,
    }

    impl MockAuth {
        fn resolving() -> Self {
            Self {
                accept: true,
                token: Some("tok-123".into()),
                logged_in: RefCell::new(false),
            }
        }

        fn rejecting() -> Self {
            Self {
                accept: false,
                ..Self::resolving()
            }
        }
    }

    #[async_trait(?Send)]
    impl AuthService for MockAuth {
        async fn login(&self, _request: &LoginRequest) -> Result<(), AuthError> {
            *self.logged_in.borrow_mut() = true;
            if self.accept {
                Ok(())
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }

        fn get_token(&self) -> Option<String> {
            if *self.logged_in.borrow() {
                self.token.clone()
            } else {
                None
            }
        }

        async fn reset_password(&self, _token: &str, _new: &str) -> Result<(), AuthError> {
            if self.accept {
                Ok(())
            } else {
                Err(AuthError::InvalidResetToken)
            }
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        session: RefCell<Option<String>>,
        persistent: RefCell<Option<String>>,
    }

    impl TokenStore for MemoryStore {
        fn save(&self, scope: TokenScope, token: &str) {
            let (target, other) = match scope {
                TokenScope::Session => (&self.session, &self.persistent),
                TokenScope::Persistent => (&self.persistent, &self.session),
            };
            *target.borrow_mut() = Some(token.to_string());
            *other.borrow_mut() = None;
        }

        fn load(&self) -> Option<String> {
            self.session
                .borrow()
                .clone()
                .or_else(|| self.persistent.borrow().clone())
        }

        fn clear(&self) {
            *self.session.borrow_mut() = None;
            *self.persistent.borrow_mut() = None;
        }
    }

    #[derive(Default)]
    struct RecordingNavigator(RefCell<Vec<String>>);

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.0.borrow_mut().push(path.to_string());
        }
    }

    fn form(remember_me: bool) -> LoginForm {
        LoginForm {
            email: "comptable@ohada.local".into(),
            password: "secret1".into(),
            remember_me,
        }
    }

    #[tokio::test]
    async fn test_login_navigates_and_stores_session_token() {
        let auth = MockAuth::resolving();
        let store = MemoryStore::default();
        let nav = RecordingNavigator::default();

        let result = submit_login(&form(false), &auth, &store, &nav).await;

        assert_eq!(result, Ok(()));
        assert_eq!(*nav.0.borrow(), vec![paths::DASHBOARD.to_string()]);
        assert_eq!(store.session.borrow().as_deref(), Some("tok-123"));
        assert_eq!(*store.persistent.borrow(), None);
    }

    #[tokio::test]
    async fn test_remember_me_stores_persistent_token() {
        let auth = MockAuth::resolving();
        let store = MemoryStore::default();
        let nav = RecordingNavigator::default();
        store.save(TokenScope::Session, "stale");

        submit_login(&form(true), &auth, &store, &nav).await.unwrap();

        assert_eq!(store.persistent.borrow().as_deref(), Some("tok-123"));
        assert_eq!(*store.session.borrow(), None);
        assert_eq!(store.load().as_deref(), Some("tok-123"));
    }

    #[tokio::test]
    async fn test_invalid_form_never_calls_service() {
        let auth = MockAuth::resolving();
        let store = MemoryStore::default();
        let nav = RecordingNavigator::default();
        let bad = LoginForm {
            email: "no-at-sign".into(),
            password: "123".into(),
            remember_me: false,
        };

        let err = submit_login(&bad, &auth, &store, &nav).await.unwrap_err();

        let errors = err.field_errors().unwrap();
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_some());
        assert!(err.banner().is_none());
        assert!(!*auth.logged_in.borrow());
        assert!(nav.0.borrow().is_empty());
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_rejected_login_shows_banner() {
        let auth = MockAuth::rejecting();
        let store = MemoryStore::default();
        let nav = RecordingNavigator::default();

        let err = submit_login(&form(false), &auth, &store, &nav).await.unwrap_err();

        assert_eq!(err.banner(), Some(AuthError::InvalidCredentials.to_string().as_str()));
        assert!(nav.0.borrow().is_empty());
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_missing_token_is_an_error() {
        let auth = MockAuth {
            token: None,
            ..MockAuth::resolving()
        };
        let (store, nav) = (MemoryStore::default(), RecordingNavigator::default());

        let err = submit_login(&form(false), &auth, &store, &nav).await.unwrap_err();

        assert_eq!(err, SubmitError::Failed(AuthError::MissingToken.to_string()));
        assert!(nav.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_reset_mismatch_blocks_submission() {
        let (auth, nav) = (MockAuth::resolving(), RecordingNavigator::default());
        let reset = ResetPasswordForm {
            token: "t".into(),
            password: "secret1".into(),
            confirmation: "secret9".into(),
        };

        let err = submit_reset_password(&reset, &auth, &nav).await.unwrap_err();

        assert!(err.field_errors().unwrap().get("confirmation").is_some());
        assert!(nav.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_reset_success_returns_to_login() {
        let (auth, nav) = (MockAuth::resolving(), RecordingNavigator::default());
        let reset = ResetPasswordForm {
            token: "t".into(),
            password: "secret1".into(),
            confirmation: "secret1".into(),
        };

        submit_reset_password(&reset, &auth, &nav).await.unwrap();

        assert_eq!(*nav.0.borrow(), vec![paths::LOGIN.to_string()]);
    }
}
