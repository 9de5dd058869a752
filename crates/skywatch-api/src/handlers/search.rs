//! Search history handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use skywatch_core::types::pagination::PageResponse;
use skywatch_entity::weather::WeatherSearch;

use crate::dto::response::{ApiResponse, ClearedResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/searches
pub async fn list_searches(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<WeatherSearch>>>> {
    let page = state
        .search_service
        .history(&auth, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// DELETE /api/searches/{id}
pub async fn delete_search(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.search_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Search deleted"))))
}

/// DELETE /api/searches
pub async fn clear_searches(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<ClearedResponse>>> {
    let hidden = state.search_service.clear(&auth).await?;
    Ok(Json(ApiResponse::ok(ClearedResponse { hidden })))
}
