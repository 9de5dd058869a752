//! Admin statistics and all-user search history.

use axum::Json;
use axum::extract::{Query, State};

use skywatch_core::types::pagination::PageResponse;
use skywatch_entity::weather::WeatherSearch;
use skywatch_service::admin::AdminStats;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<AdminStats>>> {
    let stats = state.stats_service.overview(&auth).await?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// GET /api/admin/searches
pub async fn all_searches(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<WeatherSearch>>>> {
    let page = state
        .stats_service
        .all_searches(&auth, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}
