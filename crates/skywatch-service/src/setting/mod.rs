//! Per-user display and alert settings.

pub mod service;

pub use service::SettingService;
