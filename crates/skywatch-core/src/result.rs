//! Convenience result type alias for Skywatch.

use crate::error::AppError;

/// A specialized `Result` type for Skywatch operations.
pub type AppResult<T> = Result<T, AppError>;
