//! Alert e-mail body.

use skywatch_core::traits::notification::EmailMessage;

/// Compose the notification sent when an alert fires.
///
/// `temperature` is in Celsius; a missing reading renders as `N/A`.
pub fn alert_email(
    to: &str,
    username: &str,
    query_key: &str,
    temperature: Option<f64>,
    condition: &str,
) -> EmailMessage {
    let temperature = temperature
        .map(|t| format!("{t}°C"))
        .unwrap_or_else(|| "N/A".to_string());

    let body = format!(
        "Hello {username},\n\n\
         Weather Alert Triggered!\n\n\
         Location: {query_key}\n\
         Temperature: {temperature}\n\
         Condition: {condition}\n\n\
         This is an automated alert from Weather Forecast.\n"
    );

    EmailMessage {
        to: to.to_string(),
        subject: format!("Weather Alert for {query_key}"),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_reading() {
        let message = alert_email("a@example.com", "alice", "London", Some(5.0), "heavy snow");
        assert_eq!(message.to, "a@example.com");
        assert_eq!(message.subject, "Weather Alert for London");
        assert!(message.body.starts_with("Hello alice,"));
        assert!(message.body.contains("Location: London\n"));
        assert!(message.body.contains("Temperature: 5°C\n"));
        assert!(message.body.contains("Condition: heavy snow\n"));
        assert!(message.body.ends_with("automated alert from Weather Forecast.\n"));
    }

    #[test]
    fn missing_temperature_is_na() {
        let message = alert_email("a@example.com", "alice", "Paris,FR", None, "fog");
        assert_eq!(message.subject, "Weather Alert for Paris,FR");
        assert!(message.body.contains("Temperature: N/A\n"));
    }
}
