//! AccuWeather client
//!
//! HTTP client for the AccuWeather API. Every lookup first turns the
//! coordinates into an AccuWeather location key, then queries current
//! conditions or the daily forecast for that key.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{
    Conditions, CurrentConditionsItem, DailyForecastResponse, GeopositionResponse,
};

/// Forecast lengths offered by the daily forecast endpoint
pub const FORECAST_PERIODS: [u8; 4] = [1, 5, 10, 15];

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP client could not be created
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Coordinates rejected locally or by the provider
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Request quota for the API key is used up
    #[error("Requests exceeded: API key quota used up")]
    RequestsExceeded,

    /// API key rejected
    #[error("Invalid API key")]
    InvalidApiKey,

    /// No API key configured
    #[error("API key is not set")]
    MissingApiKey,

    /// Any other unsuccessful response
    #[error("API error: {0}")]
    Api(String),
}

/// Weather service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// AccuWeather API base URL (default: <https://dataservice.accuweather.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// AccuWeather API key
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,

    /// Response language (default: en-us)
    #[serde(default = "default_language")]
    pub language: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Most forecast days ever requested (1-15, default: 5)
    #[serde(default = "default_max_forecast_days")]
    pub max_forecast_days: u8,
}

fn default_base_url() -> String {
    "https://dataservice.accuweather.com".to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

fn default_language() -> String {
    "en-us".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_max_forecast_days() -> u8 {
    5
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            language: default_language(),
            timeout_secs: default_timeout(),
            max_forecast_days: default_max_forecast_days(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a location
    async fn get_current(&self, latitude: f64, longitude: f64)
    -> Result<Conditions, WeatherError>;

    /// Get up to `days` daily forecasts for a location
    ///
    /// At most `max_forecast_days` entries are returned.
    async fn get_daily(
        &self,
        latitude: f64,
        longitude: f64,
        days: u8,
    ) -> Result<Vec<Conditions>, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// AccuWeather HTTP client implementation
///
/// Location keys are cached per coordinate pair for the lifetime of the
/// client.
#[derive(Debug)]
pub struct AccuWeatherClient {
    client: Client,
    config: WeatherConfig,
    location_keys: Mutex<HashMap<String, String>>,
}

impl AccuWeatherClient {
    /// Create a new AccuWeather client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot
    /// be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        if config.api_key.expose_secret().trim().is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config,
            location_keys: Mutex::new(HashMap::new()),
        })
    }

    /// Active configuration
    pub const fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Smallest forecast period covering `days`, capped by configuration
    fn forecast_period(&self, days: u8) -> u8 {
        let wanted = days.clamp(1, self.config.max_forecast_days.clamp(1, 15));
        FORECAST_PERIODS
            .into_iter()
            .find(|p| *p >= wanted)
            .unwrap_or(15)
    }

    /// Map an unsuccessful status to an error
    fn check_status(status: StatusCode, on_bad_request: WeatherError) -> Result<(), WeatherError> {
        match status {
            s if s.is_success() => Ok(()),
            StatusCode::SERVICE_UNAVAILABLE => Err(WeatherError::RequestsExceeded),
            StatusCode::UNAUTHORIZED => Err(WeatherError::InvalidApiKey),
            StatusCode::BAD_REQUEST => Err(on_bad_request),
            s => Err(WeatherError::Api(format!("HTTP {s}"))),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        on_bad_request: WeatherError,
    ) -> Result<T, WeatherError> {
        debug!(url = %url, "Calling AccuWeather");

        let response = self
            .client
            .get(url)
            .query(&[
                ("apikey", self.config.api_key.expose_secret()),
                ("language", self.config.language.as_str()),
            ])
            .query(query)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if let Err(e) = Self::check_status(status, on_bad_request) {
            warn!(%status, url = %url, "AccuWeather returned an error status");
            return Err(e);
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    /// Resolve coordinates to an AccuWeather location key
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn location_key(&self, latitude: f64, longitude: f64) -> Result<String, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let q = format!("{latitude},{longitude}");
        if let Some(key) = self.location_keys.lock().get(&q) {
            return Ok(key.clone());
        }

        let url = format!(
            "{}/locations/v1/cities/geoposition/search",
            self.config.base_url
        );
        let found: Option<GeopositionResponse> = self
            .get_json(&url, &[("q", q.as_str())], WeatherError::InvalidCoordinates)
            .await?;
        let key = found.ok_or(WeatherError::InvalidCoordinates)?.key;

        self.location_keys.lock().insert(q, key.clone());
        Ok(key)
    }
}

#[async_trait]
impl WeatherClient for AccuWeatherClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Conditions, WeatherError> {
        let key = self.location_key(latitude, longitude).await?;

        let url = format!("{}/currentconditions/v1/{key}", self.config.base_url);
        let items: Vec<CurrentConditionsItem> = self
            .get_json(
                &url,
                &[("details", "true")],
                WeatherError::Api("HTTP 400 Bad Request".to_string()),
            )
            .await?;

        items
            .into_iter()
            .next()
            .map(Conditions::from)
            .ok_or_else(|| WeatherError::ParseError("Empty current conditions".to_string()))
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, days = %days))]
    async fn get_daily(
        &self,
        latitude: f64,
        longitude: f64,
        days: u8,
    ) -> Result<Vec<Conditions>, WeatherError> {
        let key = self.location_key(latitude, longitude).await?;

        let period = self.forecast_period(days);
        let url = format!(
            "{}/forecasts/v1/daily/{period}day/{key}",
            self.config.base_url
        );
        let response: DailyForecastResponse = self
            .get_json(
                &url,
                &[("details", "true"), ("metric", "true")],
                WeatherError::Api("HTTP 400 Bad Request".to_string()),
            )
            .await?;

        let limit = usize::from(days.min(self.config.max_forecast_days).max(1));
        Ok(response
            .daily_forecasts
            .into_iter()
            .take(limit)
            .map(Conditions::from)
            .collect())
    }

    async fn is_healthy(&self) -> bool {
        // Location lookup for Moscow; cheapest call that checks the key
        self.location_key(55.7558, 37.6173).await.is_ok()
    }
}
