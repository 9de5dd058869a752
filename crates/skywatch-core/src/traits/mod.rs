//! Core traits defined in `skywatch-core` and implemented by other crates.

pub mod cache;
pub mod notification;

pub use cache::CacheProvider;
pub use notification::{EmailMessage, NotificationSender};
