//! Repository implementations for all Skywatch entities.

pub mod alert;
pub mod location;
pub mod search;
pub mod setting;
pub mod stats;
pub mod user;

pub use alert::AlertRepository;
pub use location::SavedLocationRepository;
pub use search::WeatherSearchRepository;
pub use setting::UserSettingRepository;
pub use stats::{CityCount, DailyCount, RecentSearch, StatsRepository};
pub use user::UserRepository;
