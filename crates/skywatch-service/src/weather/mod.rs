//! User-initiated weather searches and history.

pub mod search;
pub mod validation;
pub mod view;

pub use search::{Dashboard, SearchOutcome, SearchService};
pub use validation::validate_city;
pub use view::WeatherView;
