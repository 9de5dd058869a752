//! Built-in job handler implementations.

pub mod alert_sweep;

pub use alert_sweep::{ALERT_SWEEP_JOB, AlertSweepJob, RepositorySweepStore, SweepStore, SweepSummary};
