//! User setting entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::unit::TemperatureUnit;

/// One-to-one settings row, created lazily with defaults on first access.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSetting {
    /// Owning user.
    pub user_id: Uuid,
    /// Preferred temperature unit.
    pub temperature_unit: TemperatureUnit,
    /// Dark display theme.
    pub dark_mode: bool,
    /// Global switch for every alert preference of the user.
    pub enable_all_alerts: bool,
    /// Last modification.
    pub updated_at: DateTime<Utc>,
}

/// Partial settings update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserSetting {
    /// New temperature unit.
    pub temperature_unit: Option<TemperatureUnit>,
    /// New theme flag.
    pub dark_mode: Option<bool>,
    /// New global alert switch.
    pub enable_all_alerts: Option<bool>,
}
