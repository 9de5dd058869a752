//! Temperature unit conversion.

use skywatch_entity::setting::TemperatureUnit;

/// Render a Celsius reading in the requested unit, rounded to one decimal.
///
/// `None` stays `None`.
pub fn convert_temperature(celsius: Option<f64>, unit: TemperatureUnit) -> Option<f64> {
    let celsius = celsius?;
    let value = match unit {
        TemperatureUnit::Imperial => celsius * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Metric => celsius,
    };
    Some(round_to(value, 1))
}

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
