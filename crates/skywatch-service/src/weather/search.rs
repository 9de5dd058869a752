//! Weather search, dashboard and search history.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use skywatch_core::error::AppError;
use skywatch_core::types::pagination::{PageRequest, PageResponse};
use skywatch_database::repositories::{UserSettingRepository, WeatherSearchRepository};
use skywatch_entity::setting::TemperatureUnit;
use skywatch_entity::weather::{CreateWeatherSearch, WeatherSearch};
use skywatch_weather::{CurrentReading, DailyForecast, WeatherSource, reduce_forecast};

use super::validation::validate_city;
use super::view::WeatherView;
use crate::context::RequestContext;

/// Result of a fresh search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The recorded snapshot.
    pub search: WeatherSearch,
    /// The snapshot rendered in the user's unit.
    pub current: WeatherView,
    /// Up to five daily summaries; empty when the forecast was unavailable.
    pub forecast: Vec<DailyForecast>,
}

/// What the dashboard shows when no new search is made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    /// The most recent visible search, if any.
    pub current: Option<WeatherView>,
    /// Forecast for that search's city.
    pub forecast: Vec<DailyForecast>,
    /// The user's temperature unit.
    pub unit: TemperatureUnit,
}

/// Runs searches on behalf of a user and manages their history.
#[derive(Debug, Clone)]
pub struct SearchService {
    search_repo: Arc<WeatherSearchRepository>,
    setting_repo: Arc<UserSettingRepository>,
    weather: Arc<dyn WeatherSource>,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(
        search_repo: Arc<WeatherSearchRepository>,
        setting_repo: Arc<UserSettingRepository>,
        weather: Arc<dyn WeatherSource>,
    ) -> Self {
        Self {
            search_repo,
            setting_repo,
            weather,
        }
    }

    async fn unit_for(&self, ctx: &RequestContext) -> Result<TemperatureUnit, AppError> {
        Ok(self
            .setting_repo
            .get_or_create(ctx.user_id)
            .await?
            .temperature_unit)
    }

    /// Fetch current conditions, record the snapshot and attach the forecast.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        city_input: &str,
    ) -> Result<SearchOutcome, AppError> {
        let city = validate_city(city_input)?;
        let unit = self.unit_for(ctx).await?;

        let reading = self.weather.fetch_current(&city).await?;
        let search = self
            .search_repo
            .create(&snapshot(ctx.user_id, reading))
            .await?;

        info!(user_id = %ctx.user_id, city = %search.city, "Weather search recorded");

        let forecast = self.forecast_for(&city, unit).await;
        Ok(SearchOutcome {
            current: WeatherView::from_search(&search, unit),
            search,
            forecast,
        })
    }

    /// The latest visible search, re-rendered with the current unit.
    pub async fn dashboard(&self, ctx: &RequestContext) -> Result<Dashboard, AppError> {
        let unit = self.unit_for(ctx).await?;

        let Some(latest) = self.search_repo.find_latest_visible(ctx.user_id).await? else {
            return Ok(Dashboard {
                current: None,
                forecast: Vec::new(),
                unit,
            });
        };

        let forecast = self.forecast_for(&latest.city, unit).await;
        Ok(Dashboard {
            current: Some(WeatherView::from_search(&latest, unit)),
            forecast,
            unit,
        })
    }

    /// Forecast failures are logged and yield an empty forecast.
    async fn forecast_for(&self, city: &str, unit: TemperatureUnit) -> Vec<DailyForecast> {
        match self.weather.fetch_forecast(city).await {
            Ok(forecast) => reduce_forecast(&forecast, unit),
            Err(e) => {
                warn!(city, error = %e, "Forecast unavailable");
                Vec::new()
            }
        }
    }

    /// The user's visible history, newest first.
    pub async fn history(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<WeatherSearch>, AppError> {
        self.search_repo
            .find_visible_by_user(ctx.user_id, &page.normalized())
            .await
    }

    /// Hide one search from the user's history.
    pub async fn delete(&self, ctx: &RequestContext, search_id: Uuid) -> Result<(), AppError> {
        if !self.search_repo.soft_delete(ctx.user_id, search_id).await? {
            return Err(AppError::not_found("Search not found"));
        }
        Ok(())
    }

    /// Hide every search of the user. Returns how many were hidden.
    pub async fn clear(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        let hidden = self.search_repo.soft_delete_all(ctx.user_id).await?;
        info!(user_id = %ctx.user_id, hidden, "Search history cleared");
        Ok(hidden)
    }
}

/// Snapshot row for a reading; the provider's canonical name is stored.
fn snapshot(user_id: Uuid, reading: CurrentReading) -> CreateWeatherSearch {
    CreateWeatherSearch {
        user_id,
        city: reading.city,
        country: reading.country,
        temperature: reading.temperature,
        humidity: reading.humidity,
        wind_speed: reading.wind_speed_kph,
        weather_condition: reading.condition,
        weather_description: reading.description,
        weather_icon: reading.icon,
        api_response: Some(reading.raw),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn snapshot_keeps_canonical_fields_and_payload() {
        let user_id = Uuid::new_v4();
        let reading = CurrentReading {
            city: "London".to_string(),
            country: "GB".to_string(),
            temperature: Some(5.0),
            feels_like: Some(1.0),
            humidity: Some(90),
            wind_speed_kph: Some(7.2),
            condition: "Snow".to_string(),
            description: "heavy snow".to_string(),
            icon: "13d".to_string(),
            latitude: Some(51.5),
            longitude: Some(-0.12),
            raw: json!({ "name": "London" }),
        };

        let row = snapshot(user_id, reading);
        assert_eq!(row.user_id, user_id);
        assert_eq!(row.city, "London");
        assert_eq!(row.wind_speed, Some(7.2));
        assert_eq!(row.weather_condition, "Snow");
        assert_eq!(row.api_response, Some(json!({ "name": "London" })));
    }
}
