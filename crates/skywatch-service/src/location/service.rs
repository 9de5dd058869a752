//! Favorite location management.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use skywatch_core::error::AppError;
use skywatch_database::repositories::SavedLocationRepository;
use skywatch_entity::location::{CreateSavedLocation, SaveOutcome, SavedLocation};
use skywatch_weather::WeatherSource;

use crate::context::RequestContext;

/// A saved location and what the save did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedLocationResult {
    /// The stored row.
    pub location: SavedLocation,
    /// Created, re-activated, or already a favorite.
    pub outcome: SaveOutcome,
}

/// Handles a user's saved locations.
#[derive(Debug, Clone)]
pub struct LocationService {
    location_repo: Arc<SavedLocationRepository>,
    weather: Arc<dyn WeatherSource>,
}

impl LocationService {
    /// Creates a new location service.
    pub fn new(location_repo: Arc<SavedLocationRepository>, weather: Arc<dyn WeatherSource>) -> Self {
        Self {
            location_repo,
            weather,
        }
    }

    /// Save a city as a favorite under the provider's canonical name.
    ///
    /// The country falls back to the one given by the user when the provider
    /// reports none.
    pub async fn add(
        &self,
        ctx: &RequestContext,
        city: &str,
        country: Option<&str>,
    ) -> Result<SavedLocationResult, AppError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::validation("City is required."));
        }

        let reading = self.weather.fetch_current(city).await?;
        let country = if reading.country.is_empty() {
            country.unwrap_or_default().trim().to_string()
        } else {
            reading.country
        };

        let data = CreateSavedLocation {
            user_id: ctx.user_id,
            city: reading.city,
            country,
            latitude: reading.latitude,
            longitude: reading.longitude,
        };
        let (location, outcome) = self.location_repo.save(&data).await?;

        info!(user_id = %ctx.user_id, city = %location.city, ?outcome, "Location saved");
        Ok(SavedLocationResult { location, outcome })
    }

    /// Favorites of the user, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<SavedLocation>, AppError> {
        self.location_repo.find_favorites(ctx.user_id).await
    }

    /// Unfavorite an owned location. Returns the city name.
    pub async fn unfavorite(
        &self,
        ctx: &RequestContext,
        location_id: Uuid,
    ) -> Result<String, AppError> {
        self.location_repo
            .unfavorite(ctx.user_id, location_id)
            .await?
            .ok_or_else(|| AppError::not_found("Location not found"))
    }
}
