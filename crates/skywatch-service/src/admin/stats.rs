//! Aggregate usage statistics.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use skywatch_core::error::AppError;
use skywatch_core::types::pagination::{PageRequest, PageResponse};
use skywatch_database::repositories::{
    CityCount, DailyCount, RecentSearch, StatsRepository, UserRepository, WeatherSearchRepository,
};
use skywatch_entity::weather::WeatherSearch;

use crate::context::RequestContext;

const TOP_CITIES: i64 = 10;
const RECENT_SEARCHES: i64 = 20;
const CHART_DAYS: i64 = 7;

/// Everything shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminStats {
    /// Every search ever recorded.
    pub total_searches: u64,
    /// Distinct cities searched.
    pub unique_cities: u64,
    /// Searches in the last 24 hours.
    pub searches_last_24h: u64,
    /// Registered users.
    pub total_users: u64,
    /// Most searched cities.
    pub top_cities: Vec<CityCount>,
    /// Latest searches with usernames.
    pub recent_searches: Vec<RecentSearch>,
    /// Searches per day over the last week.
    pub daily_searches: Vec<DailyCount>,
}

/// Read-only admin views over searches and users.
#[derive(Debug, Clone)]
pub struct StatsService {
    stats_repo: Arc<StatsRepository>,
    user_repo: Arc<UserRepository>,
    search_repo: Arc<WeatherSearchRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(
        stats_repo: Arc<StatsRepository>,
        user_repo: Arc<UserRepository>,
        search_repo: Arc<WeatherSearchRepository>,
    ) -> Self {
        Self {
            stats_repo,
            user_repo,
            search_repo,
        }
    }

    /// Compute the dashboard aggregates.
    pub async fn overview(&self, ctx: &RequestContext) -> Result<AdminStats, AppError> {
        ctx.require_admin()?;
        let now = Utc::now();

        Ok(AdminStats {
            total_searches: self.stats_repo.total_searches().await?,
            unique_cities: self.stats_repo.unique_cities().await?,
            searches_last_24h: self
                .stats_repo
                .searches_since(now - Duration::days(1))
                .await?,
            total_users: self.user_repo.count().await?,
            top_cities: self.stats_repo.top_cities(TOP_CITIES).await?,
            recent_searches: self.stats_repo.recent_searches(RECENT_SEARCHES).await?,
            daily_searches: self
                .stats_repo
                .daily_counts(now - Duration::days(CHART_DAYS))
                .await?,
        })
    }

    /// Every visible search across users, newest first.
    pub async fn all_searches(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<WeatherSearch>, AppError> {
        ctx.require_admin()?;
        self.search_repo.find_all_visible(&page.normalized()).await
    }
}
