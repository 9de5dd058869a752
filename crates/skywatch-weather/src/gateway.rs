//! Cached access to the remote weather provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use skywatch_cache::CacheManager;
use skywatch_cache::keys;
use skywatch_core::config::weather::WeatherConfig;

use crate::error::GatewayError;
use crate::model::{CurrentReading, Forecast};
use crate::payload::{parse_current, parse_forecast};

/// Source of weather readings.
///
/// `city_query` is a free-text city name, optionally suffixed with
/// `,country`.
#[async_trait]
pub trait WeatherSource: Send + Sync + std::fmt::Debug + 'static {
    /// Current conditions for a city.
    async fn fetch_current(&self, city_query: &str) -> Result<CurrentReading, GatewayError>;

    /// Multi-day forecast for a city.
    async fn fetch_forecast(&self, city_query: &str) -> Result<Forecast, GatewayError>;
}

/// HTTP client for the provider's `/weather` and `/forecast` endpoints.
///
/// Successful current-conditions responses are cached under a sanitized
/// query key for `cache_ttl_seconds`. Forecasts are never cached. Failed
/// fetches never write to the cache.
#[derive(Debug, Clone)]
pub struct WeatherGateway {
    client: Client,
    config: WeatherConfig,
    cache: CacheManager,
}

impl WeatherGateway {
    /// Build a gateway with a client bounded by `timeout_seconds`.
    pub fn new(config: &WeatherConfig, cache: CacheManager) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
            cache,
        })
    }

    fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.config.cache_ttl_seconds)
    }

    fn endpoint(&self, resource: &str, city_query: &str) -> Result<Url, GatewayError> {
        let base = self.config.base_url.trim_end_matches('/');
        Url::parse_with_params(
            &format!("{base}/{resource}"),
            &[
                ("q", city_query),
                ("appid", self.config.api_key.as_str()),
                ("units", "metric"),
            ],
        )
        .map_err(|e| GatewayError::Configuration(format!("Invalid weather API URL: {e}")))
    }

    /// GET a provider resource and return its JSON body on 200.
    async fn request(&self, resource: &str, city_query: &str) -> Result<Value, GatewayError> {
        if !self.config.has_api_key() {
            return Err(GatewayError::missing_api_key());
        }

        let url = self.endpoint(resource, city_query)?;
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(resource, city = city_query, error = %e, "Weather provider unreachable");
            GatewayError::Network(e)
        })?;

        match response.status() {
            StatusCode::OK => response
                .json::<Value>()
                .await
                .map_err(|e| GatewayError::Payload(e.to_string())),
            StatusCode::NOT_FOUND => Err(GatewayError::NotFound {
                city: city_query.to_string(),
            }),
            status => {
                warn!(resource, city = city_query, %status, "Weather provider error");
                Err(GatewayError::Service(status))
            }
        }
    }
}

#[async_trait]
impl WeatherSource for WeatherGateway {
    async fn fetch_current(&self, city_query: &str) -> Result<CurrentReading, GatewayError> {
        let cache_key = keys::weather_current(city_query);

        // A failing cache degrades to a provider call.
        match self.cache.get_typed::<CurrentReading>(&cache_key).await {
            Ok(Some(reading)) => {
                debug!(key = %cache_key, "Weather cache hit");
                return Ok(reading);
            }
            Ok(None) => {}
            Err(e) => warn!(key = %cache_key, error = %e, "Weather cache read failed"),
        }

        let raw = self.request("weather", city_query).await?;
        let reading = parse_current(raw)?;

        if let Err(e) = self
            .cache
            .set_typed(&cache_key, &reading, self.cache_ttl())
            .await
        {
            warn!(key = %cache_key, error = %e, "Weather cache write failed");
        }

        Ok(reading)
    }

    async fn fetch_forecast(&self, city_query: &str) -> Result<Forecast, GatewayError> {
        let raw = self.request("forecast", city_query).await?;
        parse_forecast(&raw)
    }
}
