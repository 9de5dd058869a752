//! Saved location entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's named favorite. Unique per `(user_id, lower(city))`.
///
/// Unfavoriting flips `favorite` to false; the row is kept so that adding the
/// city again re-activates it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedLocation {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Canonical city name.
    pub city: String,
    /// Country code.
    pub country: String,
    /// Latitude.
    pub latitude: Option<f64>,
    /// Longitude.
    pub longitude: Option<f64>,
    /// Shown in the favorites list.
    pub favorite: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Data required to save a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSavedLocation {
    /// Owning user.
    pub user_id: Uuid,
    /// Canonical city name.
    pub city: String,
    /// Country code.
    pub country: String,
    /// Latitude.
    pub latitude: Option<f64>,
    /// Longitude.
    pub longitude: Option<f64>,
}

/// What the atomic save did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    /// A new row was inserted.
    Created,
    /// An unfavorited row was favorited again.
    Reactivated,
    /// The city was already a favorite.
    AlreadySaved,
}

impl SaveOutcome {
    /// Classify the upsert result from the row's prior favorite flag.
    pub fn from_prior(previously_favorite: Option<bool>) -> Self {
        match previously_favorite {
            None => Self::Created,
            Some(false) => Self::Reactivated,
            Some(true) => Self::AlreadySaved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_follows_prior_favorite_flag() {
        assert_eq!(SaveOutcome::from_prior(None), SaveOutcome::Created);
        assert_eq!(SaveOutcome::from_prior(Some(false)), SaveOutcome::Reactivated);
        assert_eq!(SaveOutcome::from_prior(Some(true)), SaveOutcome::AlreadySaved);
    }

    #[test]
    fn outcome_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(SaveOutcome::AlreadySaved).unwrap(),
            serde_json::json!("already_saved")
        );
    }
}
