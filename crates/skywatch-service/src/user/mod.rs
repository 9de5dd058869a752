//! Account self-service and admin user management.

pub mod admin;
pub mod service;

pub use admin::{AdminUserService, CleanupOutcome};
pub use service::{LoginRequest, LoginResponse, RegisterRequest, UserService};
