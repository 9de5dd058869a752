//! Weather search history repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use skywatch_core::error::{AppError, ErrorKind};
use skywatch_core::result::AppResult;
use skywatch_core::types::pagination::{PageRequest, PageResponse};
use skywatch_entity::weather::{CreateWeatherSearch, WeatherSearch};

/// Repository for weather search snapshots.
#[derive(Debug, Clone)]
pub struct WeatherSearchRepository {
    pool: PgPool,
}

impl WeatherSearchRepository {
    /// Create a new search repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a successful search.
    pub async fn create(&self, data: &CreateWeatherSearch) -> AppResult<WeatherSearch> {
        sqlx::query_as::<_, WeatherSearch>(
            "INSERT INTO weather_searches \
                 (user_id, city, country, temperature, humidity, wind_speed, \
                  weather_condition, weather_description, weather_icon, api_response) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.city)
        .bind(&data.country)
        .bind(data.temperature)
        .bind(data.humidity)
        .bind(data.wind_speed)
        .bind(&data.weather_condition)
        .bind(&data.weather_description)
        .bind(&data.weather_icon)
        .bind(&data.api_response)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record search", e))
    }

    /// Most recent search still visible to the user.
    pub async fn find_latest_visible(&self, user_id: Uuid) -> AppResult<Option<WeatherSearch>> {
        sqlx::query_as::<_, WeatherSearch>(
            "SELECT * FROM weather_searches \
             WHERE user_id = $1 AND NOT is_deleted_by_user \
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load latest search", e)
        })
    }

    /// The user's visible history, newest first.
    pub async fn find_visible_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<WeatherSearch>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM weather_searches WHERE user_id = $1 AND NOT is_deleted_by_user",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count searches", e))?;

        let items = sqlx::query_as::<_, WeatherSearch>(
            "SELECT * FROM weather_searches \
             WHERE user_id = $1 AND NOT is_deleted_by_user \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list searches", e))?;

        Ok(PageResponse::new(items, page.page, page.page_size, total as u64))
    }

    /// Every visible search across users, newest first.
    pub async fn find_all_visible(
        &self,
        page: &PageRequest,
    ) -> AppResult<PageResponse<WeatherSearch>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM weather_searches WHERE NOT is_deleted_by_user")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count searches", e)
                })?;

        let items = sqlx::query_as::<_, WeatherSearch>(
            "SELECT * FROM weather_searches WHERE NOT is_deleted_by_user \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list searches", e))?;

        Ok(PageResponse::new(items, page.page, page.page_size, total as u64))
    }

    /// Hide one of the user's searches. Returns `false` when the row does not
    /// belong to the user.
    pub async fn soft_delete(&self, user_id: Uuid, search_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE weather_searches SET is_deleted_by_user = TRUE \
             WHERE id = $1 AND user_id = $2",
        )
        .bind(search_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete search", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Hide every search of the user. Returns the number of rows hidden.
    pub async fn soft_delete_all(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE weather_searches SET is_deleted_by_user = TRUE \
             WHERE user_id = $1 AND NOT is_deleted_by_user",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear history", e))?;

        Ok(result.rows_affected())
    }
}
