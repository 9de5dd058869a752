//! Password policy for new passwords.

use skywatch_core::config::auth::AuthConfig;
use skywatch_core::error::AppError;

/// Enforces the configured minimum password length.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Checks a candidate password, counting characters rather than bytes.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enforces_minimum_length() {
        let validator = PasswordValidator::new(&AuthConfig::default());
        assert!(validator.validate("short").is_err());
        assert!(validator.validate("long enough").is_ok());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let config = AuthConfig {
            password_min_length: 4,
            ..AuthConfig::default()
        };
        assert!(PasswordValidator::new(&config).validate("äöüß").is_ok());
    }
}
