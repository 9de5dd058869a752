//! Alert preference joined with its owner, as loaded by the sweep.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::preference::AlertPreference;
use crate::user::UserStatus;

/// An active preference together with the owner fields the sweep needs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AlertSubscription {
    /// The preference itself.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub preference: AlertPreference,
    /// Owner's username.
    pub owner_username: String,
    /// Owner's e-mail address.
    pub owner_email: Option<String>,
    /// Owner's account status.
    pub owner_status: UserStatus,
    /// Owner's global alert switch; `None` when no settings row exists.
    pub alerts_enabled: Option<bool>,
}

impl AlertSubscription {
    /// The owner's e-mail, if non-blank.
    pub fn deliverable_email(&self) -> Option<&str> {
        self.owner_email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    /// Whether the owner switched off every alert.
    pub fn globally_disabled(&self) -> bool {
        self.alerts_enabled == Some(false)
    }
}
