//! Temperature unit enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit a user wants temperatures rendered in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "temperature_unit", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Celsius.
    #[default]
    Metric,
    /// Fahrenheit.
    Imperial,
}

impl TemperatureUnit {
    /// Display symbol for rendered temperatures.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Return the unit as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = skywatch_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            _ => Err(skywatch_core::AppError::validation(format!(
                "Invalid temperature unit: '{s}'. Expected one of: metric, imperial"
            ))),
        }
    }
}
