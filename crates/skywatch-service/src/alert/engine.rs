//! Trigger decision for one alert preference against one reading.

use serde::{Deserialize, Serialize};

use skywatch_entity::alert::AlertPreference;

/// Condition keywords that count as severe weather. Rain is not on the list.
pub const SEVERE_CONDITIONS: [&str; 10] = [
    "thunderstorm",
    "snow",
    "mist",
    "fog",
    "haze",
    "dust",
    "sand",
    "ash",
    "squall",
    "tornado",
];

/// Outcome of [`should_trigger`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerDecision {
    /// Whether the alert fires.
    pub fire: bool,
    /// Human-readable explanation.
    pub reason: String,
}

impl TriggerDecision {
    fn fire(reason: String) -> Self {
        Self { fire: true, reason }
    }

    fn hold(reason: &str) -> Self {
        Self {
            fire: false,
            reason: reason.to_string(),
        }
    }
}

/// Decide whether `preference` fires for the observed conditions.
///
/// The observed temperature is accepted but does not take part in the
/// decision; `temperature_threshold` is stored for display only.
pub fn should_trigger(
    preference: &AlertPreference,
    _temperature: Option<f64>,
    description: &str,
) -> TriggerDecision {
    if !preference.is_active {
        return TriggerDecision::hold("Alert is inactive");
    }

    if preference.condition_alerts && !description.is_empty() {
        let lowered = description.to_lowercase();
        if SEVERE_CONDITIONS.iter().any(|term| lowered.contains(term)) {
            return TriggerDecision::fire(format!("Severe weather condition: {description}"));
        }
    }

    TriggerDecision::hold("No severe weather conditions met")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn preference(is_active: bool, condition_alerts: bool) -> AlertPreference {
        let now = Utc::now();
        AlertPreference {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            city: "London".to_string(),
            country: String::new(),
            temperature_threshold: Some(-50.0),
            condition_alerts,
            email_alerts: true,
            is_active,
            created_at: now,
            updated_at: now,
            last_triggered: None,
        }
    }

    #[test]
    fn inactive_never_fires() {
        let decision = should_trigger(&preference(false, true), Some(5.0), "tornado");
        assert_eq!(decision, TriggerDecision::hold("Alert is inactive"));
    }

    #[test]
    fn thunderstorm_fires() {
        let decision = should_trigger(
            &preference(true, true),
            Some(20.0),
            "light rain and thunderstorm",
        );
        assert!(decision.fire);
        assert_eq!(
            decision.reason,
            "Severe weather condition: light rain and thunderstorm"
        );
    }

    #[test]
    fn plain_rain_does_not_fire() {
        let decision = should_trigger(&preference(true, true), Some(20.0), "light rain");
        assert!(!decision.fire);
        assert_eq!(decision.reason, "No severe weather conditions met");
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(should_trigger(&preference(true, true), None, "Heavy SNOW").fire);
    }

    #[test]
    fn condition_alerts_off_never_fires() {
        assert!(!should_trigger(&preference(true, false), Some(5.0), "heavy snow").fire);
    }

    #[test]
    fn empty_description_does_not_fire() {
        assert!(!should_trigger(&preference(true, true), Some(5.0), "").fire);
    }

    #[test]
    fn threshold_is_not_consulted() {
        // Far below the -50 threshold and far above it: same outcome.
        let pref = preference(true, true);
        assert!(!should_trigger(&pref, Some(-80.0), "clear sky").fire);
        assert!(!should_trigger(&pref, Some(40.0), "clear sky").fire);
    }
}
