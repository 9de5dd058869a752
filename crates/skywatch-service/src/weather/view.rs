//! Unit-aware rendering of a stored search.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use skywatch_entity::setting::TemperatureUnit;
use skywatch_entity::weather::WeatherSearch;
use skywatch_weather::convert_temperature;

/// Current conditions as shown to a user, temperatures in their unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherView {
    /// Search the view was built from.
    pub search_id: Uuid,
    /// City name.
    pub city: String,
    /// Country code.
    pub country: String,
    /// Temperature in `unit`.
    pub temperature: Option<f64>,
    /// Apparent temperature in `unit`.
    pub feels_like: Option<f64>,
    /// Relative humidity.
    pub humidity: Option<i32>,
    /// Wind speed in km/h.
    pub wind_speed: Option<f64>,
    /// Condition description.
    pub description: String,
    /// Icon code.
    pub icon: String,
    /// Unit the temperatures are in.
    pub unit: TemperatureUnit,
    /// `°C` or `°F`.
    pub unit_symbol: String,
}

impl WeatherView {
    /// Render a stored search in `unit`. The apparent temperature comes from
    /// the raw provider payload kept with the search.
    pub fn from_search(search: &WeatherSearch, unit: TemperatureUnit) -> Self {
        let feels_like = search
            .api_response
            .as_ref()
            .and_then(|raw| raw.pointer("/main/feels_like"))
            .and_then(|v| v.as_f64());

        Self {
            search_id: search.id,
            city: search.city.clone(),
            country: search.country.clone(),
            temperature: convert_temperature(search.temperature, unit),
            feels_like: convert_temperature(feels_like, unit),
            humidity: search.humidity,
            wind_speed: search.wind_speed,
            description: search.weather_description.clone(),
            icon: search.weather_icon.clone(),
            unit,
            unit_symbol: unit.symbol().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    #[test]
    fn renders_in_requested_unit() {
        let search = WeatherSearch {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            city: "London".to_string(),
            country: "GB".to_string(),
            temperature: Some(10.0),
            humidity: Some(80),
            wind_speed: Some(7.2),
            weather_condition: "Clouds".to_string(),
            weather_description: "overcast clouds".to_string(),
            weather_icon: "04d".to_string(),
            api_response: Some(json!({ "main": { "feels_like": 8.0 } })),
            created_at: Utc::now(),
            is_deleted_by_user: false,
        };

        let view = WeatherView::from_search(&search, TemperatureUnit::Imperial);
        assert_eq!(view.temperature, Some(50.0));
        assert_eq!(view.feels_like, Some(46.4));
        assert_eq!(view.unit_symbol, "°F");

        let view = WeatherView::from_search(&search, TemperatureUnit::Metric);
        assert_eq!(view.temperature, Some(10.0));
    }
}
