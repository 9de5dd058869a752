//! Alert preference and history repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use skywatch_core::error::{AppError, ErrorKind};
use skywatch_core::result::AppResult;
use skywatch_entity::alert::{
    AlertHistory, AlertPreference, AlertSubscription, CreateAlertHistory, UpsertAlertPreference,
};

/// Repository for alert preferences and their trigger history.
#[derive(Debug, Clone)]
pub struct AlertRepository {
    pool: PgPool,
}

impl AlertRepository {
    /// Create a new alert repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create or update the preference keyed on `(user_id, city, country)`.
    ///
    /// An existing preference takes the new toggles and is re-activated.
    pub async fn upsert(&self, data: &UpsertAlertPreference) -> AppResult<AlertPreference> {
        sqlx::query_as::<_, AlertPreference>(
            "INSERT INTO alert_preferences \
                 (user_id, city, country, temperature_threshold, condition_alerts, email_alerts) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (user_id, city, country) DO UPDATE SET \
                 temperature_threshold = EXCLUDED.temperature_threshold, \
                 condition_alerts = EXCLUDED.condition_alerts, \
                 email_alerts = EXCLUDED.email_alerts, \
                 is_active = TRUE, \
                 updated_at = NOW() \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.city)
        .bind(&data.country)
        .bind(data.temperature_threshold)
        .bind(data.condition_alerts)
        .bind(data.email_alerts)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save alert", e))
    }

    /// All preferences of a user, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<AlertPreference>> {
        sqlx::query_as::<_, AlertPreference>(
            "SELECT * FROM alert_preferences WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list alerts", e))
    }

    /// A preference, only if it belongs to `user_id`.
    pub async fn find_owned(
        &self,
        user_id: Uuid,
        alert_id: Uuid,
    ) -> AppResult<Option<AlertPreference>> {
        sqlx::query_as::<_, AlertPreference>(
            "SELECT * FROM alert_preferences WHERE id = $1 AND user_id = $2",
        )
        .bind(alert_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find alert", e))
    }

    /// Flip the active flag of an owned preference.
    pub async fn toggle_active(
        &self,
        user_id: Uuid,
        alert_id: Uuid,
    ) -> AppResult<Option<AlertPreference>> {
        sqlx::query_as::<_, AlertPreference>(
            "UPDATE alert_preferences SET is_active = NOT is_active, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(alert_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to toggle alert", e))
    }

    /// Delete an owned preference; its history cascades.
    pub async fn delete_owned(&self, user_id: Uuid, alert_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM alert_preferences WHERE id = $1 AND user_id = $2")
            .bind(alert_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete alert", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Deactivate every preference of a user. Returns how many changed.
    pub async fn deactivate_all_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE alert_preferences SET is_active = FALSE, updated_at = NOW() \
             WHERE user_id = $1 AND is_active",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to deactivate alerts", e)
        })?;

        Ok(result.rows_affected())
    }

    /// Count every preference.
    pub async fn count_all(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM alert_preferences")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count alerts", e))?;
        Ok(count as u64)
    }

    /// Active preferences joined with the owner fields the sweep needs.
    pub async fn find_active_subscriptions(&self) -> AppResult<Vec<AlertSubscription>> {
        sqlx::query_as::<_, AlertSubscription>(
            "SELECT p.*, \
                    u.username AS owner_username, \
                    u.email AS owner_email, \
                    u.status AS owner_status, \
                    s.enable_all_alerts AS alerts_enabled \
             FROM alert_preferences p \
             JOIN users u ON u.id = p.user_id \
             LEFT JOIN user_settings s ON s.user_id = p.user_id \
             WHERE p.is_active \
             ORDER BY p.created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load active alerts", e)
        })
    }

    /// Stamp the last trigger time of a preference.
    pub async fn mark_triggered(&self, alert_id: Uuid, at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query("UPDATE alert_preferences SET last_triggered = $2 WHERE id = $1")
            .bind(alert_id)
            .bind(at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to stamp alert trigger", e)
            })?;
        Ok(())
    }

    /// Append a history row with `email_sent = false`.
    pub async fn create_history(&self, data: &CreateAlertHistory) -> AppResult<AlertHistory> {
        sqlx::query_as::<_, AlertHistory>(
            "INSERT INTO alert_history (alert_id, temperature) VALUES ($1, $2) RETURNING *",
        )
        .bind(data.alert_id)
        .bind(data.temperature)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record alert history", e)
        })
    }

    /// Record a successful delivery on a history row.
    pub async fn mark_email_sent(&self, history_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE alert_history SET email_sent = TRUE WHERE id = $1")
            .bind(history_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to flag alert e-mail", e)
            })?;
        Ok(())
    }

    /// Trigger history of a preference, newest first.
    pub async fn find_history(&self, alert_id: Uuid, limit: i64) -> AppResult<Vec<AlertHistory>> {
        sqlx::query_as::<_, AlertHistory>(
            "SELECT * FROM alert_history WHERE alert_id = $1 \
             ORDER BY triggered_at DESC LIMIT $2",
        )
        .bind(alert_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load alert history", e)
        })
    }
}
