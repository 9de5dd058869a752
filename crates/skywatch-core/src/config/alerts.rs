//! Alert sweep configuration.

use serde::{Deserialize, Serialize};

/// Restricts which owners the alert sweep will evaluate.
///
/// Each list is one dimension of the allow-list. An empty list places no
/// restriction on its dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertsConfig {
    /// Usernames allowed to receive alerts.
    #[serde(default)]
    pub allowed_usernames: Vec<String>,
    /// E-mail addresses allowed to receive alerts.
    #[serde(default)]
    pub allowed_emails: Vec<String>,
}

impl AlertsConfig {
    /// Whether an owner passes both allow-list dimensions.
    pub fn permits(&self, username: &str, email: Option<&str>) -> bool {
        let username_ok = self.allowed_usernames.is_empty()
            || self.allowed_usernames.iter().any(|u| u == username);
        let email_ok = self.allowed_emails.is_empty()
            || email.is_some_and(|e| self.allowed_emails.iter().any(|a| a == e));
        username_ok && email_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lists_permit_everyone() {
        let config = AlertsConfig::default();
        assert!(config.permits("alice", None));
        assert!(config.permits("bob", Some("bob@example.com")));
    }

    #[test]
    fn username_dimension_only() {
        let config = AlertsConfig {
            allowed_usernames: vec!["alice".to_string()],
            allowed_emails: vec![],
        };
        assert!(config.permits("alice", None));
        assert!(!config.permits("bob", Some("bob@example.com")));
    }

    #[test]
    fn both_dimensions_must_pass() {
        let config = AlertsConfig {
            allowed_usernames: vec!["alice".to_string()],
            allowed_emails: vec!["alice@example.com".to_string()],
        };
        assert!(config.permits("alice", Some("alice@example.com")));
        assert!(!config.permits("alice", Some("other@example.com")));
        assert!(!config.permits("alice", None));
    }
}
