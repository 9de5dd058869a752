//! # skywatch-service
//!
//! Business logic service layer for Skywatch. Each service orchestrates
//! repositories, the weather gateway and credential handling to implement
//! one application use case.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod admin;
pub mod alert;
pub mod context;
pub mod location;
pub mod notification;
pub mod setting;
pub mod user;
pub mod weather;

pub use admin::{AdminStats, StatsService};
pub use alert::{AlertService, TriggerDecision, should_trigger};
pub use context::RequestContext;
pub use location::LocationService;
pub use notification::{SmtpNotificationSender, alert_email};
pub use setting::SettingService;
pub use user::{AdminUserService, CleanupOutcome, UserService};
pub use weather::{SearchService, WeatherView};
