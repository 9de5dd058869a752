//! Saved location handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use skywatch_entity::location::{SaveOutcome, SavedLocation};
use skywatch_service::location::SavedLocationResult;

use crate::dto::request::LocationBody;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validate_body;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/locations
pub async fn list_locations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<SavedLocation>>>> {
    let locations = state.location_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(locations)))
}

/// POST /api/locations
///
/// 201 for a new row, 200 when an existing row was re-favorited or was
/// already a favorite.
pub async fn add_location(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<LocationBody>,
) -> ApiResult<(StatusCode, Json<ApiResponse<SavedLocationResult>>)> {
    validate_body(&body)?;
    let result = state
        .location_service
        .add(&auth, &body.city, body.country.as_deref())
        .await?;

    let status = match result.outcome {
        SaveOutcome::Created => StatusCode::CREATED,
        _ => StatusCode::OK,
    };
    Ok((status, Json(ApiResponse::ok(result))))
}

/// DELETE /api/locations/{id}
pub async fn remove_location(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.location_service.unfavorite(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Location removed"))))
}
