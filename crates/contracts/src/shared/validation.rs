//! Synchronous field validation run before a form is submitted.

use std::collections::BTreeMap;

/// Constraints on a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub min_length: Option<usize>,
    pub email: bool,
}

impl ValidationRules {
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            min_length: None,
            email: false,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub const fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} est obligatoire", field_label));
        }

        // Optional fields left blank skip the remaining checks.
        if value.trim().is_empty() {
            return Ok(());
        }

        if self.email && !is_valid_email(value) {
            return Err(format!("{} n'est pas une adresse e-mail valide", field_label));
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} doit contenir au moins {} caractères",
                    field_label, min
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against the min rule. Non-finite values
    /// are always rejected.
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("{} n'est pas un nombre valide", field_label));
        }
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} doit être au moins {}", field_label, min));
            }
        }
        Ok(())
    }
}

/// Loose e-mail shape check: one `@` with a non-empty local part and a
/// domain. Anything stricter belongs to the auth service.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

/// Per-field error messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Records the error of `result`, if any, under `field`.
    pub fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("  ", "Nom").is_err());
        assert!(rules.validate_string("Kouassi", "Nom").is_ok());
    }

    #[test]
    fn test_min_length_counts_chars() {
        let rules = ValidationRules::required().min_length(6);
        assert!(rules.validate_string("abcde", "Mot de passe").is_err());
        assert!(rules.validate_string("éééééé", "Mot de passe").is_ok());
    }

    #[test]
    fn test_optional_blank_skips_checks() {
        let rules = ValidationRules::none().email().min_length(3);
        assert!(rules.validate_string("", "E-mail").is_ok());
        assert!(rules.validate_string("ab", "E-mail").is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("comptable@ohada.ci"));
        assert!(!is_valid_email("comptable.ohada.ci"));
        assert!(!is_valid_email("@ohada.ci"));
        assert!(!is_valid_email("comptable@"));
        assert!(!is_valid_email("a@b@c"));
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules::none().min(0.0);
        assert!(rules.validate_number(-1.0, "Montant").is_err());
        assert!(rules.validate_number(0.0, "Montant").is_ok());
        assert!(rules.validate_number(f64::NAN, "Montant").is_err());
        assert!(rules.validate_number(f64::INFINITY, "Montant").is_err());
    }

    #[test]
    fn test_field_errors_collect() {
        let mut errors = FieldErrors::new();
        errors.check("email", Err("requis".to_string()));
        errors.check("password", Ok(()));
        assert_eq!(errors.get("email"), Some("requis"));
        assert_eq!(errors.get("password"), None);
        assert!(errors.into_result().is_err());
    }
}
