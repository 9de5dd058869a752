//! User domain entities.

pub mod model;
pub mod role;
pub mod status;

pub use model::{CreateUser, UpdateUser, User};
pub use role::UserRole;
pub use status::UserStatus;
