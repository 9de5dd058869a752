use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use skywatch_core::config::alerts::AlertsConfig;
use skywatch_core::result::AppResult;
use skywatch_entity::alert::{
    AlertHistory, AlertPreference, AlertSubscription, CreateAlertHistory,
};
use skywatch_entity::user::{UserRole, UserStatus};
use skywatch_weather::{CurrentReading, Forecast, GatewayError, WeatherSource};
use skywatch_worker::{AlertSweepJob, JobExecutor, SweepStore};

use crate::helpers::{NoMail, TestApp};

/// Every fetch takes eight seconds and reports a thunderstorm.
#[derive(Debug)]
struct SlowStorms;

#[async_trait]
impl WeatherSource for SlowStorms {
    async fn fetch_current(&self, city_query: &str) -> Result<CurrentReading, GatewayError> {
        tokio::time::sleep(Duration::from_secs(8)).await;
        Ok(CurrentReading {
            city: city_query.to_string(),
            country: String::new(),
            temperature: Some(18.0),
            feels_like: None,
            humidity: Some(90),
            wind_speed_kph: Some(40.0),
            condition: "Thunderstorm".to_string(),
            description: "thunderstorm with heavy rain".to_string(),
            icon: "11d".to_string(),
            latitude: None,
            longitude: None,
            raw: serde_json::Value::Null,
        })
    }

    async fn fetch_forecast(&self, city_query: &str) -> Result<Forecast, GatewayError> {
        Err(GatewayError::NotFound {
            city: city_query.to_string(),
        })
    }
}

#[derive(Debug, Default)]
struct MemoryStore {
    subscriptions: Vec<AlertSubscription>,
    history: Mutex<Vec<AlertHistory>>,
}

#[async_trait]
impl SweepStore for MemoryStore {
    async fn count_preferences(&self) -> AppResult<u64> {
        Ok(self.subscriptions.len() as u64)
    }

    async fn active_subscriptions(&self) -> AppResult<Vec<AlertSubscription>> {
        Ok(self.subscriptions.clone())
    }

    async fn mark_triggered(&self, _alert_id: Uuid, _at: DateTime<Utc>) -> AppResult<()> {
        Ok(())
    }

    async fn record_history(&self, data: &CreateAlertHistory) -> AppResult<AlertHistory> {
        let row = AlertHistory {
            id: Uuid::new_v4(),
            alert_id: data.alert_id,
            temperature: data.temperature,
            triggered_at: Utc::now(),
            email_sent: false,
        };
        self.history.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn mark_email_sent(&self, _history_id: Uuid) -> AppResult<()> {
        Ok(())
    }
}

fn subscription(city: &str) -> AlertSubscription {
    let now = Utc::now();
    AlertSubscription {
        preference: AlertPreference {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            city: city.to_string(),
            country: String::new(),
            temperature_threshold: None,
            condition_alerts: true,
            email_alerts: false,
            is_active: true,
            created_at: now,
            updated_at: now,
            last_triggered: None,
        },
        owner_username: format!("{}-watcher", city.to_lowercase()),
        owner_email: None,
        owner_status: UserStatus::Active,
        alerts_enabled: None,
    }
}

#[tokio::test(start_paused = true)]
async fn sweep_outlives_a_timed_out_request() {
    let store = Arc::new(MemoryStore {
        subscriptions: ["Oslo", "Lima", "Cairo", "Perth", "Quito"]
            .into_iter()
            .map(subscription)
            .collect(),
        ..MemoryStore::default()
    });

    let mut jobs = JobExecutor::new();
    jobs.register(Arc::new(AlertSweepJob::new(
        Arc::clone(&store) as Arc<dyn SweepStore>,
        Arc::new(SlowStorms),
        Arc::new(NoMail),
        AlertsConfig::default(),
    )));

    let app = TestApp::with_jobs(jobs);
    let token = app.token_for(UserRole::Admin);

    // Five fetches of eight seconds each outlast the request timeout.
    let response = app
        .request("POST", "/api/admin/jobs/alert_sweep/run", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::REQUEST_TIMEOUT);

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(store.history.lock().unwrap().len(), 5);
}

#[tokio::test(start_paused = true)]
async fn sweep_summary_is_returned_when_it_finishes_in_time() {
    let store = Arc::new(MemoryStore {
        subscriptions: vec![subscription("Oslo"), subscription("Oslo")],
        ..MemoryStore::default()
    });

    let mut jobs = JobExecutor::new();
    jobs.register(Arc::new(AlertSweepJob::new(
        Arc::clone(&store) as Arc<dyn SweepStore>,
        Arc::new(SlowStorms),
        Arc::new(NoMail),
        AlertsConfig::default(),
    )));

    let app = TestApp::with_jobs(jobs);
    let token = app.token_for(UserRole::Admin);

    let response = app
        .request("POST", "/api/admin/jobs/alert_sweep/run", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["job_type"], "alert_sweep");
    assert_eq!(response.body["data"]["summary"]["processed"], 2);
    assert_eq!(response.body["data"]["summary"]["triggered"], 2);
    assert_eq!(response.body["data"]["summary"]["errors"], 0);
}
