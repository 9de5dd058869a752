//! Route handlers organized by domain.

pub mod admin;
pub mod alert;
pub mod auth;
pub mod health;
pub mod location;
pub mod search;
pub mod setting;
pub mod weather;
