//! Alert preference management for the owning user.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use skywatch_core::error::AppError;
use skywatch_database::repositories::AlertRepository;
use skywatch_entity::alert::{AlertHistory, AlertPreference, UpsertAlertPreference};

use crate::context::RequestContext;

/// Rows returned by [`AlertService::history`].
const HISTORY_LIMIT: i64 = 50;

/// Create-or-update request for one `(city, country)` pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertRequest {
    /// City name.
    pub city: String,
    /// Country code, optional.
    #[serde(default)]
    pub country: Option<String>,
    /// Temperature threshold in Celsius.
    #[serde(default)]
    pub temperature_threshold: Option<f64>,
    /// Fire on severe weather conditions.
    #[serde(default)]
    pub condition_alerts: bool,
    /// Send an e-mail when the alert fires.
    #[serde(default)]
    pub email_alerts: bool,
}

/// Handles a user's own alert preferences.
#[derive(Debug, Clone)]
pub struct AlertService {
    alert_repo: Arc<AlertRepository>,
}

impl AlertService {
    /// Creates a new alert service.
    pub fn new(alert_repo: Arc<AlertRepository>) -> Self {
        Self { alert_repo }
    }

    /// Create or update the preference for `(city, country)`. Always leaves
    /// it active.
    pub async fn upsert(
        &self,
        ctx: &RequestContext,
        req: AlertRequest,
    ) -> Result<AlertPreference, AppError> {
        let city = req.city.trim();
        if city.is_empty() {
            return Err(AppError::validation("City is required."));
        }

        let data = UpsertAlertPreference {
            user_id: ctx.user_id,
            city: city.to_string(),
            country: req.country.as_deref().unwrap_or_default().trim().to_string(),
            temperature_threshold: req.temperature_threshold,
            condition_alerts: req.condition_alerts,
            email_alerts: req.email_alerts,
        };

        let preference = self.alert_repo.upsert(&data).await?;
        info!(user_id = %ctx.user_id, alert_id = %preference.id, city = %preference.city, "Alert saved");
        Ok(preference)
    }

    /// The user's preferences, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<AlertPreference>, AppError> {
        self.alert_repo.find_by_user(ctx.user_id).await
    }

    /// Flip the active flag of an owned preference.
    pub async fn toggle(
        &self,
        ctx: &RequestContext,
        alert_id: Uuid,
    ) -> Result<AlertPreference, AppError> {
        let preference = self
            .alert_repo
            .toggle_active(ctx.user_id, alert_id)
            .await?
            .ok_or_else(|| AppError::not_found("Alert not found"))?;

        info!(
            user_id = %ctx.user_id,
            alert_id = %alert_id,
            active = preference.is_active,
            "Alert toggled"
        );
        Ok(preference)
    }

    /// Delete an owned preference together with its history.
    pub async fn delete(&self, ctx: &RequestContext, alert_id: Uuid) -> Result<(), AppError> {
        if !self.alert_repo.delete_owned(ctx.user_id, alert_id).await? {
            return Err(AppError::not_found("Alert not found"));
        }
        info!(user_id = %ctx.user_id, alert_id = %alert_id, "Alert deleted");
        Ok(())
    }

    /// Trigger history of an owned preference, newest first.
    pub async fn history(
        &self,
        ctx: &RequestContext,
        alert_id: Uuid,
    ) -> Result<Vec<AlertHistory>, AppError> {
        self.alert_repo
            .find_owned(ctx.user_id, alert_id)
            .await?
            .ok_or_else(|| AppError::not_found("Alert not found"))?;

        self.alert_repo.find_history(alert_id, HISTORY_LIMIT).await
    }
}
