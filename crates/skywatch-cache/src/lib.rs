//! # skywatch-cache
//!
//! Cache provider implementations for Skywatch. Supports two modes:
//!
//! - **memory**: In-process cache using [moka](https://crates.io/crates/moka)
//!   with a per-entry time-to-live
//! - **redis**: Redis-backed cache shared between the server and CLI processes
//!
//! The provider is selected at runtime based on configuration.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
