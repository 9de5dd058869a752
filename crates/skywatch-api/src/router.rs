//! Route definitions for the Skywatch HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::Router;
use axum::routing::{delete, get, post, put};

use crate::handlers;
use crate::state::AppState;

/// Build the API router. Layers are applied by [`crate::app::build_app`].
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(weather_routes())
        .merge(search_routes())
        .merge(alert_routes())
        .merge(location_routes())
        .merge(setting_routes())
        .merge(admin_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/weather/search", post(handlers::weather::search))
        .route("/weather/dashboard", get(handlers::weather::dashboard))
}

/// Own search history
fn search_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/searches",
            get(handlers::search::list_searches).delete(handlers::search::clear_searches),
        )
        .route("/searches/{id}", delete(handlers::search::delete_search))
}

fn alert_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/alerts",
            get(handlers::alert::list_alerts).post(handlers::alert::save_alert),
        )
        .route("/alerts/{id}", delete(handlers::alert::delete_alert))
        .route("/alerts/{id}/toggle", post(handlers::alert::toggle_alert))
        .route("/alerts/{id}/history", get(handlers::alert::alert_history))
}

fn location_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/locations",
            get(handlers::location::list_locations).post(handlers::location::add_location),
        )
        .route("/locations/{id}", delete(handlers::location::remove_location))
}

fn setting_routes() -> Router<AppState> {
    Router::new().route(
        "/settings",
        get(handlers::setting::get_settings).put(handlers::setting::update_settings),
    )
}

/// Admin endpoints: stats, users, searches, jobs
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/stats", get(handlers::admin::stats::overview))
        .route("/admin/searches", get(handlers::admin::stats::all_searches))
        .route("/admin/users", get(handlers::admin::users::list_users))
        .route(
            "/admin/users/{id}",
            put(handlers::admin::users::update_user).delete(handlers::admin::users::delete_user),
        )
        .route(
            "/admin/users/{id}/toggle",
            post(handlers::admin::users::toggle_user),
        )
        .route("/admin/jobs", get(handlers::admin::jobs::list_jobs))
        .route(
            "/admin/jobs/{job_type}/run",
            post(handlers::admin::jobs::run_job),
        )
}
