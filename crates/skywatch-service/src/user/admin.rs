//! Admin user management and account cleanup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use skywatch_core::error::AppError;
use skywatch_core::types::pagination::{PageRequest, PageResponse};
use skywatch_database::repositories::{AlertRepository, UserRepository};
use skywatch_entity::user::{UpdateUser, User, UserStatus};

use crate::context::RequestContext;

/// What [`AdminUserService::cleanup_user`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CleanupOutcome {
    /// Every alert preference of the user was deactivated.
    AlertsDisabled {
        /// Preferences that were active before.
        deactivated: u64,
    },
    /// The user and all related rows were deleted.
    Deleted,
}

/// Handles administrative user operations.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    user_repo: Arc<UserRepository>,
    alert_repo: Arc<AlertRepository>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(user_repo: Arc<UserRepository>, alert_repo: Arc<AlertRepository>) -> Self {
        Self {
            user_repo,
            alert_repo,
        }
    }

    /// Lists all users with pagination.
    pub async fn list_users(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<User>, AppError> {
        ctx.require_admin()?;
        self.user_repo.find_all(&page.normalized()).await
    }

    /// Edit username, e-mail, role or status.
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        data: UpdateUser,
    ) -> Result<User, AppError> {
        ctx.require_admin()?;
        if user_id == ctx.user_id && data.status == Some(UserStatus::Inactive) {
            return Err(AppError::validation("You cannot deactivate your own account."));
        }

        let user = self.user_repo.update(user_id, &data).await?;
        info!(admin_id = %ctx.user_id, user_id = %user_id, "User updated");
        Ok(user)
    }

    /// Flip a user between active and inactive.
    pub async fn toggle_active(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
    ) -> Result<User, AppError> {
        ctx.require_admin()?;
        if user_id == ctx.user_id {
            return Err(AppError::validation("You cannot deactivate your own account."));
        }

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        let user = self
            .user_repo
            .update_status(user_id, user.status.toggled())
            .await?;

        info!(admin_id = %ctx.user_id, user_id = %user_id, status = %user.status, "User status toggled");
        Ok(user)
    }

    /// Delete a user with every related row.
    pub async fn delete_user(&self, ctx: &RequestContext, user_id: Uuid) -> Result<(), AppError> {
        ctx.require_admin()?;
        if user_id == ctx.user_id {
            return Err(AppError::validation("You cannot delete your own account."));
        }

        if !self.user_repo.delete(user_id).await? {
            return Err(AppError::not_found("User not found"));
        }
        info!(admin_id = %ctx.user_id, user_id = %user_id, "User deleted");
        Ok(())
    }

    /// Disable every alert of a user, or delete the user outright.
    ///
    /// Operator-only; reached from the command line, not over HTTP.
    pub async fn cleanup_user(
        &self,
        username: &str,
        delete: bool,
    ) -> Result<CleanupOutcome, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

        if delete {
            self.user_repo.delete(user.id).await?;
            info!(username = %user.username, "Deleted user and related records");
            return Ok(CleanupOutcome::Deleted);
        }

        let deactivated = self.alert_repo.deactivate_all_for_user(user.id).await?;
        info!(username = %user.username, deactivated, "Disabled alerts for user");
        Ok(CleanupOutcome::AlertsDisabled { deactivated })
    }
}
