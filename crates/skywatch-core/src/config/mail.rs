//! Outgoing mail (SMTP) configuration.

use serde::{Deserialize, Serialize};

/// SMTP transport settings used for alert notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// SMTP relay host.
    #[serde(default)]
    pub host: String,
    /// SMTP port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// SMTP username.
    #[serde(default)]
    pub username: String,
    /// SMTP password.
    #[serde(default)]
    pub password: String,
    /// Sender address. Falls back to `username` when empty.
    #[serde(default)]
    pub from_address: String,
    /// Upgrade the connection with STARTTLS.
    #[serde(default = "default_starttls")]
    pub starttls: bool,
    /// Per-message send timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_port(),
            username: String::new(),
            password: String::new(),
            from_address: String::new(),
            starttls: default_starttls(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl MailConfig {
    /// The transport counts as configured only when host, username and
    /// password are all present.
    pub fn is_configured(&self) -> bool {
        !self.host.trim().is_empty()
            && !self.username.trim().is_empty()
            && !self.password.is_empty()
    }

    /// Address placed in the `From` header.
    pub fn sender(&self) -> &str {
        if self.from_address.trim().is_empty() {
            &self.username
        } else {
            &self.from_address
        }
    }
}

fn default_port() -> u16 {
    587
}

fn default_starttls() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_without_credentials() {
        let mut config = MailConfig {
            host: "smtp.example.com".to_string(),
            ..MailConfig::default()
        };
        assert!(!config.is_configured());

        config.username = "alerts@example.com".to_string();
        assert!(!config.is_configured());

        config.password = "secret".to_string();
        assert!(config.is_configured());
    }

    #[test]
    fn sender_falls_back_to_username() {
        let config = MailConfig {
            username: "alerts@example.com".to_string(),
            ..MailConfig::default()
        };
        assert_eq!(config.sender(), "alerts@example.com");
    }
}
