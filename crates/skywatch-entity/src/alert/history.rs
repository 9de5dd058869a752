//! Alert trigger history entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Append-only record of one trigger decision.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AlertHistory {
    /// Unique identifier.
    pub id: Uuid,
    /// Preference that fired.
    pub alert_id: Uuid,
    /// Observed temperature in Celsius (0 when unavailable).
    pub temperature: f64,
    /// When the preference fired.
    pub triggered_at: DateTime<Utc>,
    /// Whether the notification e-mail was delivered.
    pub email_sent: bool,
}

/// Data required to append a history row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAlertHistory {
    /// Preference that fired.
    pub alert_id: Uuid,
    /// Observed temperature in Celsius.
    pub temperature: f64,
}
