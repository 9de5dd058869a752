//! # skywatch-entity
//!
//! Domain entity models for Skywatch. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod alert;
pub mod location;
pub mod setting;
pub mod user;
pub mod weather;
