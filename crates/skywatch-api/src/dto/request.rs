//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use skywatch_entity::setting::{TemperatureUnit, UpdateUserSetting};
use skywatch_entity::user::{UpdateUser, UserRole, UserStatus};
use skywatch_service::alert::AlertRequest;
use skywatch_service::user::{LoginRequest, RegisterRequest};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterBody {
    /// Username.
    #[validate(length(min = 3, max = 50, message = "Username must be 3 to 50 characters"))]
    pub username: String,
    /// E-mail for alert notifications.
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    /// Password; the length policy is enforced by the service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<RegisterBody> for RegisterRequest {
    fn from(body: RegisterBody) -> Self {
        Self {
            username: body.username,
            email: body.email,
            password: body.password,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginBody {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<LoginBody> for LoginRequest {
    fn from(body: LoginBody) -> Self {
        Self {
            username: body.username,
            password: body.password,
        }
    }
}

/// Weather search request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchBody {
    /// City name, optionally `City,CC`.
    #[validate(length(max = 100, message = "City name is too long"))]
    pub city: String,
}

/// Create-or-update alert preference body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AlertBody {
    /// City name.
    #[validate(length(min = 1, max = 100, message = "City is required."))]
    pub city: String,
    /// Country code.
    #[serde(default)]
    #[validate(length(max = 10))]
    pub country: Option<String>,
    /// Temperature threshold in Celsius.
    #[serde(default)]
    #[validate(range(min = -100.0, max = 100.0))]
    pub temperature_threshold: Option<f64>,
    /// Fire on severe conditions.
    #[serde(default)]
    pub condition_alerts: bool,
    /// Send an e-mail when fired.
    #[serde(default)]
    pub email_alerts: bool,
}

impl From<AlertBody> for AlertRequest {
    fn from(body: AlertBody) -> Self {
        Self {
            city: body.city,
            country: body.country,
            temperature_threshold: body.temperature_threshold,
            condition_alerts: body.condition_alerts,
            email_alerts: body.email_alerts,
        }
    }
}

/// Save-location body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationBody {
    /// City name.
    #[validate(length(min = 1, max = 100, message = "City is required."))]
    pub city: String,
    /// Country code used when the provider reports none.
    #[serde(default)]
    #[validate(length(max = 10))]
    pub country: Option<String>,
}

/// Settings update body. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsBody {
    /// Preferred unit.
    #[serde(default)]
    pub temperature_unit: Option<TemperatureUnit>,
    /// Dark theme.
    #[serde(default)]
    pub dark_mode: Option<bool>,
    /// Global alert switch.
    #[serde(default)]
    pub enable_all_alerts: Option<bool>,
}

impl From<SettingsBody> for UpdateUserSetting {
    fn from(body: SettingsBody) -> Self {
        Self {
            temperature_unit: body.temperature_unit,
            dark_mode: body.dark_mode,
            enable_all_alerts: body.enable_all_alerts,
        }
    }
}

/// Admin edit of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AdminUpdateUserBody {
    /// New username.
    #[serde(default)]
    #[validate(length(min = 3, max = 50, message = "Username must be 3 to 50 characters"))]
    pub username: Option<String>,
    /// New e-mail.
    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    /// New role.
    #[serde(default)]
    pub role: Option<UserRole>,
    /// New status.
    #[serde(default)]
    pub status: Option<UserStatus>,
}

impl From<AdminUpdateUserBody> for UpdateUser {
    fn from(body: AdminUpdateUserBody) -> Self {
        Self {
            username: body.username.map(|u| u.trim().to_string()),
            email: body.email.map(|e| e.trim().to_string()),
            role: body.role,
            status: body.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::validate_body;

    #[test]
    fn register_rejects_short_username_and_bad_email() {
        let body = RegisterBody {
            username: "al".to_string(),
            email: Some("not-an-email".to_string()),
            password: "secret123".to_string(),
        };
        let err = validate_body(&body).unwrap_err();
        assert_eq!(
            err.message,
            "email: Invalid email format; username: Username must be 3 to 50 characters"
        );
    }

    #[test]
    fn register_accepts_missing_email() {
        let body = RegisterBody {
            username: "alice".to_string(),
            email: None,
            password: "secret123".to_string(),
        };
        assert!(validate_body(&body).is_ok());
    }

    #[test]
    fn alert_threshold_must_be_plausible() {
        let body = AlertBody {
            city: "London".to_string(),
            country: None,
            temperature_threshold: Some(500.0),
            condition_alerts: true,
            email_alerts: false,
        };
        assert!(validate_body(&body).is_err());
    }
}
