//! # skywatch-api
//!
//! HTTP API for Skywatch built on Axum. Provides:
//!
//! - JSON endpoints for searches, alerts, locations, settings and admin
//! - Bearer-token authentication via the [`extractors::AuthUser`] extractor
//! - Request logging, CORS, compression, timeout and body-limit layers

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
