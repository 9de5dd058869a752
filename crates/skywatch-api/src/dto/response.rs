//! Response DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Plain acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Liveness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Readiness including the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// `"connected"` or `"unavailable"`.
    pub database: String,
    /// Whether a weather API key is configured.
    pub weather_configured: bool,
    /// Whether outgoing mail is configured.
    pub mail_configured: bool,
}

/// Result of clearing the search history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearedResponse {
    /// Searches hidden.
    pub hidden: u64,
}

/// Registered job types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    /// Job type names.
    pub job_types: Vec<String>,
}

/// Outcome of an on-demand job run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRunResponse {
    /// Job type that ran.
    pub job_type: String,
    /// The job's summary.
    pub summary: Value,
}
