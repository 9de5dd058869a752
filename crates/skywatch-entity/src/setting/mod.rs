//! Per-user display and alert settings.

pub mod model;
pub mod unit;

pub use model::{UpdateUserSetting, UserSetting};
pub use unit::TemperatureUnit;
