//! Shared application state injected into all handlers via Axum's `State` extractor.

use std::sync::Arc;

use skywatch_auth::{JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator};
use skywatch_core::config::AppConfig;
use skywatch_core::traits::notification::NotificationSender;
use skywatch_database::DatabasePool;
use skywatch_database::repositories::{
    AlertRepository, SavedLocationRepository, StatsRepository, UserRepository,
    UserSettingRepository, WeatherSearchRepository,
};
use skywatch_service::{
    AdminUserService, AlertService, LocationService, SearchService, SettingService, StatsService,
    UserService,
};
use skywatch_weather::WeatherSource;
use skywatch_worker::{AlertSweepJob, JobExecutor, RepositorySweepStore};

/// Application state shared across all request handlers.
///
/// All fields are `Arc`-wrapped so cloning the state per request is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ──
    /// Application configuration.
    pub config: Arc<AppConfig>,

    // ── Infrastructure ──
    /// Database connection pool.
    pub db: DatabasePool,
    /// Bearer token verifier.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// On-demand job registry.
    pub jobs: Arc<JobExecutor>,

    // ── Services ──
    /// Registration, login and profile.
    pub user_service: Arc<UserService>,
    /// Searches, dashboard and history.
    pub search_service: Arc<SearchService>,
    /// Alert preferences.
    pub alert_service: Arc<AlertService>,
    /// Saved locations.
    pub location_service: Arc<LocationService>,
    /// Per-user settings.
    pub setting_service: Arc<SettingService>,
    /// Admin user management.
    pub admin_user_service: Arc<AdminUserService>,
    /// Admin statistics.
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    /// Wire repositories, credentials, services and jobs around a pool.
    ///
    /// The weather source and notification sender are passed in so callers
    /// decide which transport backs them.
    pub fn new(
        config: AppConfig,
        db: DatabasePool,
        weather: Arc<dyn WeatherSource>,
        notifier: Arc<dyn NotificationSender>,
    ) -> Self {
        let pool = db.pool().clone();

        // ── Repositories ──
        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let setting_repo = Arc::new(UserSettingRepository::new(pool.clone()));
        let search_repo = Arc::new(WeatherSearchRepository::new(pool.clone()));
        let alert_repo = Arc::new(AlertRepository::new(pool.clone()));
        let location_repo = Arc::new(SavedLocationRepository::new(pool.clone()));
        let stats_repo = Arc::new(StatsRepository::new(pool));

        // ── Credentials ──
        let hasher = Arc::new(PasswordHasher::new());
        let validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        // ── Services ──
        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repo),
            hasher,
            validator,
            jwt_encoder,
        ));
        let search_service = Arc::new(SearchService::new(
            Arc::clone(&search_repo),
            Arc::clone(&setting_repo),
            Arc::clone(&weather),
        ));
        let alert_service = Arc::new(AlertService::new(Arc::clone(&alert_repo)));
        let location_service = Arc::new(LocationService::new(location_repo, Arc::clone(&weather)));
        let setting_service = Arc::new(SettingService::new(setting_repo));
        let admin_user_service = Arc::new(AdminUserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&alert_repo),
        ));
        let stats_service = Arc::new(StatsService::new(stats_repo, user_repo, search_repo));

        // ── Jobs ──
        let mut jobs = JobExecutor::new();
        jobs.register(Arc::new(AlertSweepJob::new(
            Arc::new(RepositorySweepStore::new(alert_repo)),
            weather,
            notifier,
            config.alerts.clone(),
        )));

        Self {
            config: Arc::new(config),
            db,
            jwt_decoder,
            jobs: Arc::new(jobs),
            user_service,
            search_service,
            alert_service,
            location_service,
            setting_service,
            admin_user_service,
            stats_service,
        }
    }
}
