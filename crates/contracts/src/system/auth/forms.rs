use super::{LoginRequest, ResetPasswordRequest, TokenScope};
use crate::shared::validation::{FieldErrors, ValidationRules};

pub const PASSWORD_MIN_LENGTH: usize = 6;

const EMAIL_RULES: ValidationRules = ValidationRules::required().email();
const PASSWORD_RULES: ValidationRules =
    ValidationRules::required().min_length(PASSWORD_MIN_LENGTH);

/// Login form as edited on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    /// Errors are keyed `email` and `password`.
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("email", EMAIL_RULES.validate_string(&self.email, "L'adresse e-mail"));
        errors.check(
            "password",
            PASSWORD_RULES.validate_string(&self.password, "Le mot de passe"),
        );
        errors.into_result()?;

        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    pub fn scope(&self) -> TokenScope {
        TokenScope::from_remember_me(self.remember_me)
    }
}

/// Reset-password form; `token` comes from the link query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetPasswordForm {
    pub token: String,
    pub password: String,
    pub confirmation: String,
}

impl ResetPasswordForm {
    /// Errors are keyed `token`, `password` and `confirmation`.
    pub fn validate(&self) -> Result<ResetPasswordRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.token.trim().is_empty() {
            errors.insert("token", "Le lien de réinitialisation est incomplet");
        }
        errors.check(
            "password",
            PASSWORD_RULES.validate_string(&self.password, "Le mot de passe"),
        );
        if self.confirmation != self.password {
            errors.insert("confirmation", "Les mots de passe ne correspondent pas");
        }
        errors.into_result()?;

        Ok(ResetPasswordRequest {
            token: self.token.trim().to_string(),
            new_password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    #[test]
    fn test_login_requires_email() {
        let errors = login("", "secret1").validate().unwrap_err();
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_none());
    }

    #[test]
    fn test_login_rejects_email_without_at() {
        let errors = login("admin.ohada.local", "secret1").validate().unwrap_err();
        assert!(errors.get("email").is_some());
    }

    #[test]
    fn test_login_rejects_short_password() {
        let errors = login("a@b.cm", "12345").validate().unwrap_err();
        assert!(errors.get("password").is_some());
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn test_login_builds_trimmed_request() {
        let request = login("  a@b.cm ", "123456").validate().unwrap();
        assert_eq!(request.email, "a@b.cm");
        assert_eq!(request.password, "123456");
    }

    #[test]
    fn test_remember_me_selects_scope() {
        let mut form = login("a@b.cm", "123456");
        assert_eq!(form.scope(), TokenScope::Session);
        form.remember_me = true;
        assert_eq!(form.scope(), TokenScope::Persistent);
    }

    #[test]
    fn test_reset_confirmation_mismatch() {
        let form = ResetPasswordForm {
            token: "abc".into(),
            password: "secret1".into(),
            confirmation: "secret2".into(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.get("confirmation").is_some());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_reset_requires_token_and_length() {
        let form = ResetPasswordForm {
            token: String::new(),
            password: "abc".into(),
            confirmation: "abc".into(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.get("token").is_some());
        assert!(errors.get("password").is_some());
        assert!(errors.get("confirmation").is_none());
    }

    #[test]
    fn test_reset_valid() {
        let form = ResetPasswordForm {
            token: "abc".into(),
            password: "secret1".into(),
            confirmation: "secret1".into(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.new_password, "secret1");
    }
}
