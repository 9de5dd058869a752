//! On-demand background jobs for Skywatch.
//!
//! This crate provides:
//! - A job executor that dispatches a job type to its registered handler
//! - The alert sweep, which evaluates every active alert preference against
//!   fresh weather and sends notification e-mails
//!
//! Nothing here schedules itself; jobs run when the CLI or the admin API
//! asks for them.

pub mod executor;
pub mod jobs;

pub use executor::{JobExecutionError, JobExecutor, JobHandler};
pub use jobs::{ALERT_SWEEP_JOB, AlertSweepJob, RepositorySweepStore, SweepStore, SweepSummary};
