//! Admin handlers. Every handler requires the admin role.

pub mod jobs;
pub mod stats;
pub mod users;
