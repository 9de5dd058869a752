//! Outgoing notification seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// A plain-text e-mail ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Delivers e-mail notifications.
///
/// Implementations report delivery failure through the returned error;
/// callers decide whether the failure is fatal.
#[async_trait]
pub trait NotificationSender: Send + Sync + std::fmt::Debug + 'static {
    /// Whether the transport has the credentials it needs to send.
    fn is_configured(&self) -> bool;

    /// Send one message.
    async fn send(&self, message: &EmailMessage) -> AppResult<()>;
}
