//! On-demand job handlers.

use axum::Json;
use axum::extract::{Path, State};
use tracing::info;

use skywatch_core::error::AppError;

use crate::dto::response::{ApiResponse, JobListResponse, JobRunResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<JobListResponse>>> {
    auth.require_admin()?;
    Ok(Json(ApiResponse::ok(JobListResponse {
        job_types: state.jobs.registered_types(),
    })))
}

/// POST /api/admin/jobs/{job_type}/run
pub async fn run_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_type): Path<String>,
) -> ApiResult<Json<ApiResponse<JobRunResponse>>> {
    auth.require_admin()?;
    if !state.jobs.has_handler(&job_type) {
        return Err(AppError::not_found(format!("Unknown job type '{job_type}'")).into());
    }

    info!(admin = %auth.username, job_type = %job_type, "Running job on demand");
    let summary = state
        .jobs
        .execute(&job_type)
        .await
        .map_err(AppError::from)?;

    Ok(Json(ApiResponse::ok(JobRunResponse { job_type, summary })))
}
