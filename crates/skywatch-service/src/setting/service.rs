//! User settings service.

use std::sync::Arc;

use tracing::info;

use skywatch_core::error::AppError;
use skywatch_database::repositories::UserSettingRepository;
use skywatch_entity::setting::{UpdateUserSetting, UserSetting};

use crate::context::RequestContext;

/// Reads and updates the settings row of the current user.
#[derive(Debug, Clone)]
pub struct SettingService {
    setting_repo: Arc<UserSettingRepository>,
}

impl SettingService {
    /// Creates a new settings service.
    pub fn new(setting_repo: Arc<UserSettingRepository>) -> Self {
        Self { setting_repo }
    }

    /// Settings of the user, created with defaults on first access.
    pub async fn get(&self, ctx: &RequestContext) -> Result<UserSetting, AppError> {
        self.setting_repo.get_or_create(ctx.user_id).await
    }

    /// Apply a partial update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        data: UpdateUserSetting,
    ) -> Result<UserSetting, AppError> {
        let settings = self.setting_repo.update(ctx.user_id, &data).await?;
        info!(
            user_id = %ctx.user_id,
            unit = %settings.temperature_unit,
            alerts = settings.enable_all_alerts,
            "Settings updated"
        );
        Ok(settings)
    }
}
