//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use skywatch_core::types::pagination::PageResponse;
use skywatch_entity::user::User;

use crate::dto::request::AdminUpdateUserBody;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validate_body;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<User>>>> {
    let page = state
        .admin_user_service
        .list_users(&auth, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// PUT /api/admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<AdminUpdateUserBody>,
) -> ApiResult<Json<ApiResponse<User>>> {
    auth.require_admin()?;
    validate_body(&body)?;
    let user = state
        .admin_user_service
        .update_user(&auth, id, body.into())
        .await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// POST /api/admin/users/{id}/toggle
pub async fn toggle_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let user = state.admin_user_service.toggle_active(&auth, id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.admin_user_service.delete_user(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("User deleted"))))
}
