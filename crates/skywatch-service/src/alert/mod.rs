//! Alert evaluation and alert preference management.

pub mod engine;
pub mod service;

pub use engine::{SEVERE_CONDITIONS, TriggerDecision, should_trigger};
pub use service::{AlertRequest, AlertService};
