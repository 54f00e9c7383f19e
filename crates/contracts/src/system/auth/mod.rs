//! Authentication contract: wire types, collaborator traits, form
//! validation and the login / reset-password flows.

pub mod demo;
pub mod flow;
pub mod forms;
pub mod service;

pub use demo::DemoAuthService;
pub use flow::{submit_login, submit_reset_password, SubmitError};
pub use forms::{LoginForm, ResetPasswordForm};
pub use service::{AuthService, Navigator, TokenStore};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_admin: bool,
}

/// Where the session token is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenScope {
    /// Cleared when the browser session ends.
    Session,
    /// Survives browser restarts ("remember me").
    Persistent,
}

impl TokenScope {
    pub fn from_remember_me(remember_me: bool) -> Self {
        if remember_me {
            TokenScope::Persistent
        } else {
            TokenScope::Session
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Adresse e-mail ou mot de passe incorrect")]
    InvalidCredentials,
    #[error("Le lien de réinitialisation est invalide ou a expiré")]
    InvalidResetToken,
    #[error("Le service d'authentification n'a renvoyé aucun jeton")]
    MissingToken,
    #[error("Service d'authentification injoignable : {0}")]
    Transport(String),
    #[error("{0}")]
    Rejected(String),
}
