//! Weather search and dashboard handlers.

use axum::Json;
use axum::extract::State;

use skywatch_service::weather::{Dashboard, SearchOutcome};

use crate::dto::request::SearchBody;
use crate::dto::response::ApiResponse;
use crate::dto::validate_body;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/weather/search
pub async fn search(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<SearchBody>,
) -> ApiResult<Json<ApiResponse<SearchOutcome>>> {
    validate_body(&body)?;
    let outcome = state.search_service.search(&auth, &body.city).await?;
    Ok(Json(ApiResponse::ok(outcome)))
}

/// GET /api/weather/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Dashboard>>> {
    let dashboard = state.search_service.dashboard(&auth).await?;
    Ok(Json(ApiResponse::ok(dashboard)))
}
