//! Provider JSON → typed readings.
//!
//! The provider document is only ever handled as a `serde_json::Value` in
//! this module. Missing fields become `None` or empty strings; a document of
//! the wrong shape altogether is rejected.

use serde::Deserialize;
use serde_json::Value;

use crate::error::GatewayError;
use crate::model::{CurrentReading, Forecast, ForecastSample};
use crate::units::round_to;

/// Meters per second → kilometers per hour.
const MS_TO_KPH: f64 = 3.6;

#[derive(Debug, Default, Deserialize)]
struct ConditionPayload {
    #[serde(default)]
    main: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Default, Deserialize)]
struct MainPayload {
    temp: Option<f64>,
    feels_like: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct WindPayload {
    speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct SysPayload {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct CoordPayload {
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CurrentPayload {
    #[serde(default)]
    name: String,
    #[serde(default)]
    weather: Vec<ConditionPayload>,
    #[serde(default)]
    main: MainPayload,
    #[serde(default)]
    wind: WindPayload,
    #[serde(default)]
    sys: SysPayload,
    coord: Option<CoordPayload>,
}

#[derive(Debug, Deserialize)]
struct SamplePayload {
    dt: Option<i64>,
    #[serde(default)]
    main: MainPayload,
    #[serde(default)]
    weather: Vec<ConditionPayload>,
}

#[derive(Debug, Default, Deserialize)]
struct CityPayload {
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    #[serde(default)]
    list: Vec<SamplePayload>,
    #[serde(default)]
    city: CityPayload,
}

/// Build a [`CurrentReading`] from a `/weather` response body.
pub fn parse_current(raw: Value) -> Result<CurrentReading, GatewayError> {
    let payload: CurrentPayload = serde_json::from_value(raw.clone())
        .map_err(|e| GatewayError::Payload(format!("current conditions: {e}")))?;

    let condition = payload.weather.into_iter().next().unwrap_or_default();
    let (latitude, longitude) = payload
        .coord
        .map(|c| (c.lat, c.lon))
        .unwrap_or((None, None));
    // Absent wind speed reads as calm.
    let wind_speed = payload.wind.speed.unwrap_or(0.0);

    Ok(CurrentReading {
        city: payload.name,
        country: payload.sys.country,
        temperature: payload.main.temp,
        feels_like: payload.main.feels_like,
        humidity: payload.main.humidity.map(|h| h.round() as i32),
        wind_speed_kph: Some(round_to(wind_speed * MS_TO_KPH, 2)),
        condition: condition.main,
        description: condition.description,
        icon: condition.icon,
        latitude,
        longitude,
        raw,
    })
}

/// Build a [`Forecast`] from a `/forecast` response body.
///
/// Samples without a timestamp are dropped.
pub fn parse_forecast(raw: &Value) -> Result<Forecast, GatewayError> {
    let payload = ForecastPayload::deserialize(raw)
        .map_err(|e| GatewayError::Payload(format!("forecast: {e}")))?;

    let samples = payload
        .list
        .into_iter()
        .filter_map(|sample| {
            let timestamp = sample.dt.filter(|dt| *dt != 0)?;
            let condition = sample.weather.into_iter().next().unwrap_or_default();
            Some(ForecastSample {
                timestamp,
                temperature: sample.main.temp,
                condition: condition.main,
                description: condition.description,
                icon: condition.icon,
            })
        })
        .collect();

    Ok(Forecast {
        timezone_offset: payload.city.timezone,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn london() -> Value {
        json!({
            "coord": { "lon": -0.1257, "lat": 51.5085 },
            "weather": [{ "id": 601, "main": "Snow", "description": "heavy snow", "icon": "13d" }],
            "main": { "temp": 5.0, "feels_like": 1.2, "humidity": 87 },
            "wind": { "speed": 4.1 },
            "sys": { "country": "GB" },
            "name": "London"
        })
    }

    #[test]
    fn parses_current_conditions() {
        let reading = parse_current(london()).unwrap();
        assert_eq!(reading.city, "London");
        assert_eq!(reading.country, "GB");
        assert_eq!(reading.temperature, Some(5.0));
        assert_eq!(reading.humidity, Some(87));
        assert_eq!(reading.wind_speed_kph, Some(14.76));
        assert_eq!(reading.condition_text(), "heavy snow");
        assert_eq!(reading.latitude, Some(51.5085));
        assert_eq!(reading.raw, london());
    }

    #[test]
    fn tolerates_missing_sections() {
        let reading = parse_current(json!({ "name": "Nowhere" })).unwrap();
        assert_eq!(reading.temperature, None);
        assert_eq!(reading.wind_speed_kph, Some(0.0));
        assert_eq!(reading.condition_text(), "");
        assert_eq!(reading.latitude, None);
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(matches!(
            parse_current(json!(["not", "an", "object"])),
            Err(GatewayError::Payload(_))
        ));
    }

    #[test]
    fn parses_forecast_and_drops_untimed_samples() {
        let raw = json!({
            "list": [
                { "dt": 1_700_000_000, "main": { "temp": 3.5 },
                  "weather": [{ "main": "Clouds", "description": "overcast clouds", "icon": "04d" }] },
                { "main": { "temp": 9.9 }, "weather": [] },
                { "dt": 0, "main": { "temp": 9.9 } }
            ],
            "city": { "timezone": 3600 }
        });
        let forecast = parse_forecast(&raw).unwrap();
        assert_eq!(forecast.timezone_offset, 3600);
        assert_eq!(forecast.samples.len(), 1);
        assert_eq!(forecast.samples[0].description, "overcast clouds");
    }

    #[test]
    fn empty_forecast_document() {
        let forecast = parse_forecast(&json!({})).unwrap();
        assert!(forecast.samples.is_empty());
        assert_eq!(forecast.timezone_offset, 0);
    }
}
