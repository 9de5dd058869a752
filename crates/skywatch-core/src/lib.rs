//! # skywatch-core
//!
//! Core crate for Skywatch. Contains the configuration schema, the unified
//! error system, the cache and notification seams, and shared pagination
//! and response types.
//!
//! This crate has **no** internal dependencies on other Skywatch crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
