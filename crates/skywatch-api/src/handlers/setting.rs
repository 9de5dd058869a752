//! Settings handlers.

use axum::Json;
use axum::extract::State;

use skywatch_entity::setting::UserSetting;

use crate::dto::request::SettingsBody;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/settings
pub async fn get_settings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<UserSetting>>> {
    let settings = state.setting_service.get(&auth).await?;
    Ok(Json(ApiResponse::ok(settings)))
}

/// PUT /api/settings
pub async fn update_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<SettingsBody>,
) -> ApiResult<Json<ApiResponse<UserSetting>>> {
    let settings = state.setting_service.update(&auth, body.into()).await?;
    Ok(Json(ApiResponse::ok(settings)))
}
