//! Alert preference and trigger history entities.

pub mod history;
pub mod preference;
pub mod subscription;

pub use history::{AlertHistory, CreateAlertHistory};
pub use preference::{AlertPreference, UpsertAlertPreference};
pub use subscription::AlertSubscription;
