//! Saved (favorite) location entities.

pub mod model;

pub use model::{CreateSavedLocation, SaveOutcome, SavedLocation};
