//! Alert sweep: evaluates every active alert preference once.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use skywatch_core::config::alerts::AlertsConfig;
use skywatch_core::result::AppResult;
use skywatch_core::traits::notification::NotificationSender;
use skywatch_database::repositories::AlertRepository;
use skywatch_entity::alert::{AlertHistory, AlertSubscription, CreateAlertHistory};
use skywatch_service::alert::should_trigger;
use skywatch_service::notification::alert_email;
use skywatch_weather::{CurrentReading, WeatherSource};

use crate::executor::{JobExecutionError, JobHandler};

/// Job type under which the sweep is registered.
pub const ALERT_SWEEP_JOB: &str = "alert_sweep";

/// Persistence the sweep reads from and writes to.
#[async_trait]
pub trait SweepStore: Send + Sync + std::fmt::Debug {
    /// Number of preferences, active or not.
    async fn count_preferences(&self) -> AppResult<u64>;

    /// Active preferences joined with their owners.
    async fn active_subscriptions(&self) -> AppResult<Vec<AlertSubscription>>;

    /// Stamp the preference's last trigger time.
    async fn mark_triggered(&self, alert_id: Uuid, at: DateTime<Utc>) -> AppResult<()>;

    /// Append a history row with `email_sent = false`.
    async fn record_history(&self, data: &CreateAlertHistory) -> AppResult<AlertHistory>;

    /// Flag a history row as delivered.
    async fn mark_email_sent(&self, history_id: Uuid) -> AppResult<()>;
}

/// [`SweepStore`] backed by the alert repository.
#[derive(Debug, Clone)]
pub struct RepositorySweepStore {
    alert_repo: Arc<AlertRepository>,
}

impl RepositorySweepStore {
    /// Wrap the alert repository.
    pub fn new(alert_repo: Arc<AlertRepository>) -> Self {
        Self { alert_repo }
    }
}

#[async_trait]
impl SweepStore for RepositorySweepStore {
    async fn count_preferences(&self) -> AppResult<u64> {
        self.alert_repo.count_all().await
    }

    async fn active_subscriptions(&self) -> AppResult<Vec<AlertSubscription>> {
        self.alert_repo.find_active_subscriptions().await
    }

    async fn mark_triggered(&self, alert_id: Uuid, at: DateTime<Utc>) -> AppResult<()> {
        self.alert_repo.mark_triggered(alert_id, at).await
    }

    async fn record_history(&self, data: &CreateAlertHistory) -> AppResult<AlertHistory> {
        self.alert_repo.create_history(data).await
    }

    async fn mark_email_sent(&self, history_id: Uuid) -> AppResult<()> {
        self.alert_repo.mark_email_sent(history_id).await
    }
}

/// Counters reported at the end of a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepSummary {
    /// Preferences that reached the trigger decision.
    pub processed: u64,
    /// Preferences that fired.
    pub triggered: u64,
    /// Preferences passed over before the decision.
    pub skipped: u64,
    /// Fetch, persistence and delivery failures.
    pub errors: u64,
}

/// Evaluates every active alert preference against current weather.
///
/// Preferences are handled one at a time. Each distinct query key is
/// fetched at most once per run; a key whose fetch failed is treated as
/// unavailable for the rest of the run. Failures are counted, never fatal.
#[derive(Debug, Clone)]
pub struct AlertSweepJob {
    store: Arc<dyn SweepStore>,
    weather: Arc<dyn WeatherSource>,
    notifier: Arc<dyn NotificationSender>,
    alerts: AlertsConfig,
}

impl AlertSweepJob {
    /// Create a sweep over the given collaborators.
    pub fn new(
        store: Arc<dyn SweepStore>,
        weather: Arc<dyn WeatherSource>,
        notifier: Arc<dyn NotificationSender>,
        alerts: AlertsConfig,
    ) -> Self {
        Self {
            store,
            weather,
            notifier,
            alerts,
        }
    }

    /// Run one full sweep.
    ///
    /// Only loading the preferences can fail the run.
    pub async fn run(&self) -> AppResult<SweepSummary> {
        let total = self.store.count_preferences().await?;
        let subscriptions = self.store.active_subscriptions().await?;
        info!(
            total,
            active = subscriptions.len(),
            allowed_usernames = ?self.alerts.allowed_usernames,
            allowed_emails = ?self.alerts.allowed_emails,
            "Starting alert sweep"
        );

        let mut summary = SweepSummary::default();
        // `None` marks a key whose fetch failed earlier in this run.
        let mut readings: HashMap<String, Option<Arc<CurrentReading>>> = HashMap::new();

        for subscription in &subscriptions {
            if !self.is_eligible(subscription) {
                summary.skipped += 1;
                continue;
            }

            let key = subscription.preference.query_key();
            let reading = match readings.get(&key) {
                Some(Some(reading)) => Arc::clone(reading),
                Some(None) => {
                    summary.skipped += 1;
                    continue;
                }
                None => match self.weather.fetch_current(&key).await {
                    Ok(reading) => {
                        let reading = Arc::new(reading);
                        readings.insert(key.clone(), Some(Arc::clone(&reading)));
                        reading
                    }
                    Err(e) => {
                        warn!(key = %key, error = %e, "Weather unavailable for alert");
                        summary.errors += 1;
                        readings.insert(key, None);
                        continue;
                    }
                },
            };

            self.evaluate(subscription, &key, &reading, &mut summary)
                .await;
        }

        info!(
            processed = summary.processed,
            triggered = summary.triggered,
            skipped = summary.skipped,
            errors = summary.errors,
            "Alert sweep finished"
        );
        Ok(summary)
    }

    fn is_eligible(&self, subscription: &AlertSubscription) -> bool {
        self.alerts.permits(
            &subscription.owner_username,
            subscription.deliverable_email(),
        ) && subscription.owner_status.is_active()
            && !subscription.globally_disabled()
            && !subscription.preference.city.trim().is_empty()
    }

    async fn evaluate(
        &self,
        subscription: &AlertSubscription,
        key: &str,
        reading: &CurrentReading,
        summary: &mut SweepSummary,
    ) {
        let preference = &subscription.preference;
        let condition = reading.condition_text();
        let decision = should_trigger(preference, reading.temperature, condition);
        summary.processed += 1;
        if !decision.fire {
            return;
        }

        if let Err(e) = self.store.mark_triggered(preference.id, Utc::now()).await {
            warn!(alert_id = %preference.id, error = %e, "Failed to stamp alert trigger");
            summary.errors += 1;
            return;
        }

        let history = match self
            .store
            .record_history(&CreateAlertHistory {
                alert_id: preference.id,
                temperature: reading.temperature.unwrap_or(0.0),
            })
            .await
        {
            Ok(history) => history,
            Err(e) => {
                warn!(alert_id = %preference.id, error = %e, "Failed to record alert history");
                summary.errors += 1;
                return;
            }
        };

        summary.triggered += 1;
        info!(
            username = %subscription.owner_username,
            key,
            reason = %decision.reason,
            "Alert triggered"
        );

        if preference.email_alerts {
            self.notify(subscription, key, reading, &history, summary)
                .await;
        }
    }

    async fn notify(
        &self,
        subscription: &AlertSubscription,
        key: &str,
        reading: &CurrentReading,
        history: &AlertHistory,
        summary: &mut SweepSummary,
    ) {
        if !self.notifier.is_configured() {
            warn!(alert_id = %history.alert_id, "Mail transport not configured; alert e-mail not sent");
            summary.errors += 1;
            return;
        }

        let Some(to) = subscription.deliverable_email() else {
            warn!(username = %subscription.owner_username, "Owner has no e-mail address; alert e-mail not sent");
            summary.errors += 1;
            return;
        };

        let message = alert_email(
            to,
            &subscription.owner_username,
            key,
            reading.temperature,
            reading.condition_text(),
        );

        if let Err(e) = self.notifier.send(&message).await {
            warn!(to, error = %e, "Failed to send alert e-mail");
            summary.errors += 1;
            return;
        }

        if let Err(e) = self.store.mark_email_sent(history.id).await {
            warn!(history_id = %history.id, error = %e, "Failed to flag alert e-mail as sent");
            summary.errors += 1;
        }
    }
}

#[async_trait]
impl JobHandler for AlertSweepJob {
    fn job_type(&self) -> &str {
        ALERT_SWEEP_JOB
    }

    async fn execute(&self) -> Result<Value, JobExecutionError> {
        let summary = self
            .run()
            .await
            .map_err(|e| JobExecutionError::Transient(format!("Alert sweep failed: {e}")))?;
        Ok(serde_json::to_value(summary).map_err(skywatch_core::error::AppError::from)?)
    }
}
