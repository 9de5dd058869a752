//! Repository tests against a migrated PostgreSQL database.
//!
//! Set `SKYWATCH_TEST_DATABASE_URL` (or `DATABASE_URL`) to run them; without
//! one each test returns early. Rows are keyed on fresh users, so tests can
//! share a database and run concurrently.

use sqlx::PgPool;
use uuid::Uuid;

use skywatch_database::migration::run_migrations;
use skywatch_database::repositories::{
    AlertRepository, SavedLocationRepository, UserRepository, UserSettingRepository,
};
use skywatch_entity::alert::{CreateAlertHistory, UpsertAlertPreference};
use skywatch_entity::location::{CreateSavedLocation, SaveOutcome};
use skywatch_entity::setting::{TemperatureUnit, UpdateUserSetting};
use skywatch_entity::user::{CreateUser, User, UserRole};

async fn test_pool() -> Option<PgPool> {
    let url = std::env::var("SKYWATCH_TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()?;

    let pool = PgPool::connect(&url)
        .await
        .expect("Failed to connect to test database");
    run_migrations(&pool).await.expect("Failed to run migrations");
    Some(pool)
}

async fn create_user(pool: &PgPool) -> User {
    let suffix = Uuid::new_v4().simple().to_string();
    UserRepository::new(pool.clone())
        .create(&CreateUser {
            username: format!("repo-{}", &suffix[..12]),
            email: Some(format!("{}@example.com", &suffix[..12])),
            password_hash: "not-a-real-hash".to_string(),
            role: UserRole::User,
        })
        .await
        .expect("Failed to create user")
}

fn alert_for(user: &User, city: &str, email_alerts: bool) -> UpsertAlertPreference {
    UpsertAlertPreference {
        user_id: user.id,
        city: city.to_string(),
        country: "NO".to_string(),
        temperature_threshold: Some(25.0),
        condition_alerts: true,
        email_alerts,
    }
}

fn location_for(user: &User, city: &str) -> CreateSavedLocation {
    CreateSavedLocation {
        user_id: user.id,
        city: city.to_string(),
        country: "FR".to_string(),
        latitude: Some(48.85),
        longitude: Some(2.35),
    }
}

#[tokio::test]
async fn alert_upsert_updates_and_reactivates_existing_preference() {
    let Some(pool) = test_pool().await else { return };
    let user = create_user(&pool).await;
    let repo = AlertRepository::new(pool);

    let first = repo.upsert(&alert_for(&user, "Bergen", false)).await.unwrap();
    assert!(first.is_active);

    let toggled = repo.toggle_active(user.id, first.id).await.unwrap().unwrap();
    assert!(!toggled.is_active);

    let second = repo.upsert(&alert_for(&user, "Bergen", true)).await.unwrap();
    assert_eq!(second.id, first.id);
    assert!(second.is_active);
    assert!(second.email_alerts);

    assert_eq!(repo.find_by_user(user.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn alert_history_cascades_with_its_preference() {
    let Some(pool) = test_pool().await else { return };
    let user = create_user(&pool).await;
    let repo = AlertRepository::new(pool);

    let alert = repo.upsert(&alert_for(&user, "Tromso", false)).await.unwrap();
    let history = repo
        .create_history(&CreateAlertHistory {
            alert_id: alert.id,
            temperature: 0.0,
        })
        .await
        .unwrap();
    assert!(!history.email_sent);

    repo.mark_email_sent(history.id).await.unwrap();
    let rows = repo.find_history(alert.id, 10).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].email_sent);

    assert!(repo.delete_owned(user.id, alert.id).await.unwrap());
    assert!(repo.find_history(alert.id, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn alert_delete_requires_ownership() {
    let Some(pool) = test_pool().await else { return };
    let owner = create_user(&pool).await;
    let stranger = create_user(&pool).await;
    let repo = AlertRepository::new(pool);

    let alert = repo.upsert(&alert_for(&owner, "Oslo", false)).await.unwrap();

    assert!(!repo.delete_owned(stranger.id, alert.id).await.unwrap());
    assert!(repo.find_owned(stranger.id, alert.id).await.unwrap().is_none());
    assert!(repo.find_owned(owner.id, alert.id).await.unwrap().is_some());
}

#[tokio::test]
async fn active_subscriptions_join_owner_and_optional_settings() {
    let Some(pool) = test_pool().await else { return };
    let user = create_user(&pool).await;
    let alerts = AlertRepository::new(pool.clone());
    let settings = UserSettingRepository::new(pool);

    let active = alerts.upsert(&alert_for(&user, "Narvik", true)).await.unwrap();
    let paused = alerts.upsert(&alert_for(&user, "Alta", true)).await.unwrap();
    alerts.toggle_active(user.id, paused.id).await.unwrap();

    let mine = |subs: Vec<skywatch_entity::alert::AlertSubscription>| {
        subs.into_iter()
            .filter(|s| s.preference.user_id == user.id)
            .collect::<Vec<_>>()
    };

    let subs = mine(alerts.find_active_subscriptions().await.unwrap());
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].preference.id, active.id);
    assert_eq!(subs[0].owner_username, user.username);
    assert_eq!(subs[0].owner_email, user.email);
    assert!(subs[0].owner_status.is_active());
    assert_eq!(subs[0].alerts_enabled, None);

    settings
        .update(
            user.id,
            &UpdateUserSetting {
                enable_all_alerts: Some(false),
                ..UpdateUserSetting::default()
            },
        )
        .await
        .unwrap();

    let subs = mine(alerts.find_active_subscriptions().await.unwrap());
    assert_eq!(subs[0].alerts_enabled, Some(false));
    assert!(subs[0].globally_disabled());
}

#[tokio::test]
async fn location_save_reports_created_already_saved_and_reactivated() {
    let Some(pool) = test_pool().await else { return };
    let user = create_user(&pool).await;
    let repo = SavedLocationRepository::new(pool);

    let (created, outcome) = repo.save(&location_for(&user, "Paris")).await.unwrap();
    assert_eq!(outcome, SaveOutcome::Created);
    assert!(created.favorite);

    let (again, outcome) = repo.save(&location_for(&user, "paris")).await.unwrap();
    assert_eq!(outcome, SaveOutcome::AlreadySaved);
    assert_eq!(again.id, created.id);
    assert_eq!(again.city, "Paris");

    let removed = repo.unfavorite(user.id, created.id).await.unwrap();
    assert_eq!(removed.as_deref(), Some("Paris"));
    assert!(repo.find_favorites(user.id).await.unwrap().is_empty());

    let (back, outcome) = repo.save(&location_for(&user, "PARIS")).await.unwrap();
    assert_eq!(outcome, SaveOutcome::Reactivated);
    assert_eq!(back.id, created.id);
    assert!(back.favorite);
    assert_eq!(repo.find_favorites(user.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn location_unfavorite_ignores_other_users_rows() {
    let Some(pool) = test_pool().await else { return };
    let owner = create_user(&pool).await;
    let stranger = create_user(&pool).await;
    let repo = SavedLocationRepository::new(pool);

    let (location, _) = repo.save(&location_for(&owner, "Lyon")).await.unwrap();

    assert!(repo.unfavorite(stranger.id, location.id).await.unwrap().is_none());
    assert_eq!(repo.find_favorites(owner.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn settings_are_created_lazily_with_defaults() {
    let Some(pool) = test_pool().await else { return };
    let user = create_user(&pool).await;
    let repo = UserSettingRepository::new(pool);

    let settings = repo.get_or_create(user.id).await.unwrap();
    assert_eq!(settings.temperature_unit, TemperatureUnit::Metric);
    assert!(settings.dark_mode);
    assert!(settings.enable_all_alerts);

    let updated = repo
        .update(
            user.id,
            &UpdateUserSetting {
                temperature_unit: Some(TemperatureUnit::Imperial),
                ..UpdateUserSetting::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.temperature_unit, TemperatureUnit::Imperial);
    assert!(updated.dark_mode);

    let reread = repo.get_or_create(user.id).await.unwrap();
    assert_eq!(reread.temperature_unit, TemperatureUnit::Imperial);
}

#[tokio::test]
async fn settings_update_without_prior_row_fills_defaults() {
    let Some(pool) = test_pool().await else { return };
    let user = create_user(&pool).await;
    let repo = UserSettingRepository::new(pool);

    let settings = repo
        .update(
            user.id,
            &UpdateUserSetting {
                dark_mode: Some(false),
                ..UpdateUserSetting::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(settings.temperature_unit, TemperatureUnit::Metric);
    assert!(!settings.dark_mode);
    assert!(settings.enable_all_alerts);
}
