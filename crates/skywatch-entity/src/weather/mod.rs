//! Weather search history entities.

pub mod search;

pub use search::{CreateWeatherSearch, WeatherSearch};
