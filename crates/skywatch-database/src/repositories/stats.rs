//! Aggregate queries backing the admin statistics panel.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use skywatch_core::error::{AppError, ErrorKind};
use skywatch_core::result::AppResult;

/// Number of searches recorded for one city.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CityCount {
    /// City name.
    pub city: String,
    /// Searches for that city.
    pub total: i64,
}

/// Number of searches recorded on one UTC calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailyCount {
    /// Calendar day.
    pub date: NaiveDate,
    /// Searches that day.
    pub count: i64,
}

/// A recent search together with the username that ran it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecentSearch {
    /// Search identifier.
    pub id: Uuid,
    /// Who searched.
    pub username: String,
    /// City searched.
    pub city: String,
    /// Country code.
    pub country: String,
    /// Temperature in Celsius.
    pub temperature: Option<f64>,
    /// Condition description.
    pub weather_description: String,
    /// When the search ran.
    pub created_at: DateTime<Utc>,
}

/// Read-only aggregate queries over searches and users.
#[derive(Debug, Clone)]
pub struct StatsRepository {
    pool: PgPool,
}

impl StatsRepository {
    /// Create a new statistics repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_err(e: sqlx::Error) -> AppError {
        AppError::with_source(ErrorKind::Database, "Failed to compute statistics", e)
    }

    /// Every search ever recorded, hidden ones included.
    pub async fn total_searches(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM weather_searches")
            .fetch_one(&self.pool)
            .await
            .map_err(Self::map_err)?;
        Ok(count as u64)
    }

    /// Distinct city names searched.
    pub async fn unique_cities(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT city) FROM weather_searches")
            .fetch_one(&self.pool)
            .await
            .map_err(Self::map_err)?;
        Ok(count as u64)
    }

    /// Searches recorded at or after `since`.
    pub async fn searches_since(&self, since: DateTime<Utc>) -> AppResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM weather_searches WHERE created_at >= $1")
                .bind(since)
                .fetch_one(&self.pool)
                .await
                .map_err(Self::map_err)?;
        Ok(count as u64)
    }

    /// Most searched cities, highest count first.
    pub async fn top_cities(&self, limit: i64) -> AppResult<Vec<CityCount>> {
        sqlx::query_as::<_, CityCount>(
            "SELECT city, COUNT(*) AS total FROM weather_searches \
             GROUP BY city ORDER BY total DESC, city ASC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(Self::map_err)
    }

    /// Latest searches with their usernames.
    pub async fn recent_searches(&self, limit: i64) -> AppResult<Vec<RecentSearch>> {
        sqlx::query_as::<_, RecentSearch>(
            "SELECT s.id, u.username, s.city, s.country, s.temperature, \
                    s.weather_description, s.created_at \
             FROM weather_searches s JOIN users u ON u.id = s.user_id \
             ORDER BY s.created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(Self::map_err)
    }

    /// Searches per UTC day since `since`, earliest day first. Days without
    /// searches are absent.
    pub async fn daily_counts(&self, since: DateTime<Utc>) -> AppResult<Vec<DailyCount>> {
        sqlx::query_as::<_, DailyCount>(
            "SELECT (created_at AT TIME ZONE 'UTC')::date AS date, COUNT(*) AS count \
             FROM weather_searches WHERE created_at >= $1 \
             GROUP BY 1 ORDER BY 1",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(Self::map_err)
    }
}
