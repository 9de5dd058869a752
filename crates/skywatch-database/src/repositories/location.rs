//! Saved location repository implementation.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use skywatch_core::error::{AppError, ErrorKind};
use skywatch_core::result::AppResult;
use skywatch_entity::location::{CreateSavedLocation, SaveOutcome, SavedLocation};

#[derive(Debug, FromRow)]
struct UpsertRow {
    #[sqlx(flatten)]
    location: SavedLocation,
    previously_favorite: Option<bool>,
}

/// Repository for saved (favorite) locations.
#[derive(Debug, Clone)]
pub struct SavedLocationRepository {
    pool: PgPool,
}

impl SavedLocationRepository {
    /// Create a new saved location repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Atomically save a location keyed on `(user_id, lower(city))`.
    ///
    /// A previously unfavorited row is favorited again instead of
    /// duplicated; an existing favorite is left untouched.
    pub async fn save(&self, data: &CreateSavedLocation) -> AppResult<(SavedLocation, SaveOutcome)> {
        // `prior` reads the statement snapshot, i.e. the state before the upsert.
        let row = sqlx::query_as::<_, UpsertRow>(
            "WITH prior AS ( \
                 SELECT favorite FROM saved_locations \
                 WHERE user_id = $1 AND LOWER(city) = LOWER($2) \
             ) \
             INSERT INTO saved_locations (user_id, city, country, latitude, longitude) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (user_id, (LOWER(city))) DO UPDATE SET favorite = TRUE \
             RETURNING saved_locations.*, (SELECT favorite FROM prior) AS previously_favorite",
        )
        .bind(data.user_id)
        .bind(&data.city)
        .bind(&data.country)
        .bind(data.latitude)
        .bind(data.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save location", e))?;

        Ok((row.location, SaveOutcome::from_prior(row.previously_favorite)))
    }

    /// The user's favorites, newest first.
    pub async fn find_favorites(&self, user_id: Uuid) -> AppResult<Vec<SavedLocation>> {
        sqlx::query_as::<_, SavedLocation>(
            "SELECT * FROM saved_locations WHERE user_id = $1 AND favorite \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list locations", e))
    }

    /// Unfavorite an owned location. Returns the city name when a row changed.
    pub async fn unfavorite(&self, user_id: Uuid, location_id: Uuid) -> AppResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            "UPDATE saved_locations SET favorite = FALSE \
             WHERE id = $1 AND user_id = $2 RETURNING city",
        )
        .bind(location_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to remove location", e))
    }
}
