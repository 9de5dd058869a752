//! Typed weather readings produced from provider payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One current-conditions observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentReading {
    /// Canonical city name reported by the provider.
    pub city: String,
    /// Country code reported by the provider.
    pub country: String,
    /// Temperature in Celsius.
    pub temperature: Option<f64>,
    /// Apparent temperature in Celsius.
    pub feels_like: Option<f64>,
    /// Relative humidity in percent.
    pub humidity: Option<i32>,
    /// Wind speed in km/h, rounded to two decimals.
    pub wind_speed_kph: Option<f64>,
    /// Condition group (`Rain`, `Snow`, ...).
    pub condition: String,
    /// Human-readable condition (`light rain`).
    pub description: String,
    /// Provider icon code.
    pub icon: String,
    /// Latitude of the matched city.
    pub latitude: Option<f64>,
    /// Longitude of the matched city.
    pub longitude: Option<f64>,
    /// The provider document this reading was built from.
    pub raw: serde_json::Value,
}

impl CurrentReading {
    /// Description, falling back to the condition group.
    pub fn condition_text(&self) -> &str {
        if self.description.is_empty() {
            &self.condition
        } else {
            &self.description
        }
    }
}

/// A multi-day forecast of 3-hour samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Offset of the queried city from UTC, in seconds.
    pub timezone_offset: i32,
    /// Samples in provider order.
    pub samples: Vec<ForecastSample>,
}

/// One 3-hour forecast sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Unix timestamp (UTC).
    pub timestamp: i64,
    /// Temperature in Celsius.
    pub temperature: Option<f64>,
    /// Condition group.
    pub condition: String,
    /// Human-readable condition.
    pub description: String,
    /// Provider icon code.
    pub icon: String,
}

/// One day of the reduced forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Local calendar date.
    pub date: NaiveDate,
    /// Display label, e.g. `Mon, Jan 05`.
    pub label: String,
    /// Up to three snapshots, in target-hour order.
    pub slots: Vec<ForecastSlot>,
}

/// A snapshot nearest to one target hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSlot {
    /// Hour label, e.g. `9 AM`.
    pub label: String,
    /// Local time, e.g. `9:00 AM`.
    pub time: String,
    /// Temperature in the caller's unit.
    pub temperature: Option<f64>,
    /// Description, or the condition group when empty.
    pub description: String,
    /// Provider icon code.
    pub icon: String,
}
