//! Alert preference handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use skywatch_entity::alert::{AlertHistory, AlertPreference};

use crate::dto::request::AlertBody;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validate_body;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/alerts
pub async fn list_alerts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<AlertPreference>>>> {
    let alerts = state.alert_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(alerts)))
}

/// POST /api/alerts
pub async fn save_alert(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<AlertBody>,
) -> ApiResult<Json<ApiResponse<AlertPreference>>> {
    validate_body(&body)?;
    let alert = state.alert_service.upsert(&auth, body.into()).await?;
    Ok(Json(ApiResponse::ok(alert)))
}

/// POST /api/alerts/{id}/toggle
pub async fn toggle_alert(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<AlertPreference>>> {
    let alert = state.alert_service.toggle(&auth, id).await?;
    Ok(Json(ApiResponse::ok(alert)))
}

/// DELETE /api/alerts/{id}
pub async fn delete_alert(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.alert_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Alert deleted"))))
}

/// GET /api/alerts/{id}/history
pub async fn alert_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<AlertHistory>>>> {
    let history = state.alert_service.history(&auth, id).await?;
    Ok(Json(ApiResponse::ok(history)))
}
