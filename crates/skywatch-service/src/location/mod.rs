//! Saved (favorite) locations.

pub mod service;

pub use service::{LocationService, SavedLocationResult};
