//! Weather search snapshot entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Immutable snapshot of one reading fetched on behalf of a user.
///
/// Only `is_deleted_by_user` ever changes after insertion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WeatherSearch {
    /// Unique identifier.
    pub id: Uuid,
    /// User who ran the search.
    pub user_id: Uuid,
    /// Canonical city name returned by the provider.
    pub city: String,
    /// ISO country code returned by the provider.
    pub country: String,
    /// Temperature in Celsius.
    pub temperature: Option<f64>,
    /// Relative humidity in percent.
    pub humidity: Option<i32>,
    /// Wind speed in km/h.
    pub wind_speed: Option<f64>,
    /// Condition group (`Rain`, `Snow`, ...).
    pub weather_condition: String,
    /// Human-readable condition.
    pub weather_description: String,
    /// Provider icon code.
    pub weather_icon: String,
    /// Raw provider payload.
    pub api_response: Option<serde_json::Value>,
    /// When the search ran.
    pub created_at: DateTime<Utc>,
    /// Hidden from the owner's history.
    pub is_deleted_by_user: bool,
}

/// Data required to record a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWeatherSearch {
    /// User who ran the search.
    pub user_id: Uuid,
    /// Canonical city name.
    pub city: String,
    /// Country code.
    pub country: String,
    /// Temperature in Celsius.
    pub temperature: Option<f64>,
    /// Relative humidity.
    pub humidity: Option<i32>,
    /// Wind speed in km/h.
    pub wind_speed: Option<f64>,
    /// Condition group.
    pub weather_condition: String,
    /// Condition description.
    pub weather_description: String,
    /// Icon code.
    pub weather_icon: String,
    /// Raw provider payload.
    pub api_response: Option<serde_json::Value>,
}
