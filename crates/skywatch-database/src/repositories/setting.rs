//! User setting repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use skywatch_core::error::{AppError, ErrorKind};
use skywatch_core::result::AppResult;
use skywatch_entity::setting::{UpdateUserSetting, UserSetting};

/// Repository for the one-to-one settings row of each user.
#[derive(Debug, Clone)]
pub struct UserSettingRepository {
    pool: PgPool,
}

impl UserSettingRepository {
    /// Create a new settings repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the user's settings, inserting the defaults on first access.
    pub async fn get_or_create(&self, user_id: Uuid) -> AppResult<UserSetting> {
        // The no-op update makes RETURNING yield the existing row on conflict.
        sqlx::query_as::<_, UserSetting>(
            "INSERT INTO user_settings (user_id) VALUES ($1) \
             ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id \
             RETURNING *",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load user settings", e))
    }

    /// Apply a partial update, creating the row first if needed.
    pub async fn update(&self, user_id: Uuid, data: &UpdateUserSetting) -> AppResult<UserSetting> {
        sqlx::query_as::<_, UserSetting>(
            "INSERT INTO user_settings (user_id, temperature_unit, dark_mode, enable_all_alerts) \
             VALUES ($1, COALESCE($2, 'metric'::temperature_unit), COALESCE($3, TRUE), COALESCE($4, TRUE)) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 temperature_unit = COALESCE($2, user_settings.temperature_unit), \
                 dark_mode = COALESCE($3, user_settings.dark_mode), \
                 enable_all_alerts = COALESCE($4, user_settings.enable_all_alerts), \
                 updated_at = NOW() \
             RETURNING *",
        )
        .bind(user_id)
        .bind(data.temperature_unit)
        .bind(data.dark_mode)
        .bind(data.enable_all_alerts)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update user settings", e)
        })
    }
}
