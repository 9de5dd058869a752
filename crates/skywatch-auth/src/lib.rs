//! # skywatch-auth
//!
//! Credential handling for Skywatch.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and the length policy
//! - `jwt`: bearer token issuance and validation

pub mod jwt;
pub mod password;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
