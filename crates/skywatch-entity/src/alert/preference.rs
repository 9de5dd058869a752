//! Alert preference entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's standing alert subscription for one (city, country) pair.
///
/// Unique per `(user_id, city, country)`; `country` is the empty string when
/// the user did not specify one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AlertPreference {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// City name as entered.
    pub city: String,
    /// Country code, or empty.
    pub country: String,
    /// Temperature threshold in Celsius. Stored and editable only.
    pub temperature_threshold: Option<f64>,
    /// Fire on severe weather conditions.
    pub condition_alerts: bool,
    /// Send an e-mail when the alert fires.
    pub email_alerts: bool,
    /// Whether the sweep evaluates this preference.
    pub is_active: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification.
    pub updated_at: DateTime<Utc>,
    /// Last time the sweep fired this preference.
    pub last_triggered: Option<DateTime<Utc>>,
}

impl AlertPreference {
    /// Weather query for this preference: `city` or `city,country`.
    pub fn query_key(&self) -> String {
        let city = self.city.trim();
        let country = self.country.trim();
        if country.is_empty() {
            city.to_string()
        } else {
            format!("{city},{country}")
        }
    }
}

/// Create-or-update request keyed on `(user_id, city, country)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertAlertPreference {
    /// Owning user.
    pub user_id: Uuid,
    /// City name.
    pub city: String,
    /// Country code, or empty.
    pub country: String,
    /// Temperature threshold in Celsius.
    pub temperature_threshold: Option<f64>,
    /// Fire on severe weather conditions.
    pub condition_alerts: bool,
    /// Send an e-mail when the alert fires.
    pub email_alerts: bool,
}
