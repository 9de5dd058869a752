//! # skywatch-weather
//!
//! Everything that talks to, or reshapes data from, the remote weather
//! provider:
//!
//! - [`gateway`]: cached current-conditions and forecast fetches
//! - [`payload`]: conversion of the provider's JSON into typed readings
//! - [`forecast`]: reduction of 3-hour samples into daily summaries
//! - [`units`]: temperature unit conversion

pub mod error;
pub mod forecast;
pub mod gateway;
pub mod model;
pub mod payload;
pub mod units;

pub use error::GatewayError;
pub use forecast::reduce_forecast;
pub use gateway::{WeatherGateway, WeatherSource};
pub use model::{CurrentReading, DailyForecast, Forecast, ForecastSample, ForecastSlot};
pub use units::convert_temperature;
