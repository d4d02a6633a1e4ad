//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::{ApplicationError, ProviderError};
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{ForecastDays, Location, WeatherObservation};
use integration_weather::{
    AccuWeatherClient, Conditions, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather services using the AccuWeather API
pub struct WeatherAdapter {
    client: AccuWeatherClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"AccuWeatherClient")
            .field("base_url", &self.client.config().base_url)
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = AccuWeatherClient::new(config).map_err(|e| match e {
            WeatherError::MissingApiKey => ApplicationError::Configuration(e.to_string()),
            other => Self::map_error(other),
        })?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        let provider = match err {
            WeatherError::RequestsExceeded => ProviderError::QuotaExceeded,
            WeatherError::InvalidApiKey | WeatherError::MissingApiKey => {
                ProviderError::InvalidCredentials
            },
            WeatherError::InvalidCoordinates => ProviderError::InvalidCoordinates,
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ParseError(e)
            | WeatherError::Api(e) => ProviderError::Api(e),
        };
        ApplicationError::Provider(provider)
    }

    /// Convert provider conditions to a domain observation
    fn map_conditions(conditions: Conditions) -> WeatherObservation {
        WeatherObservation {
            condition_text: conditions.text,
            temperature_celsius: conditions.temperature_celsius,
            feels_like_phrase: conditions.real_feel_phrase,
            humidity_percent: conditions.relative_humidity,
            wind_speed_kmh: conditions.wind_speed_kmh,
            precipitation_mm: conditions.precipitation_mm,
            has_precipitation: conditions.has_precipitation,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_current(
        &self,
        location: &Location,
    ) -> Result<WeatherObservation, ApplicationError> {
        let result = self
            .client
            .get_current(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.temperature_celsius,
                    condition = %current.text,
                    "Retrieved current conditions"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current conditions");
            },
        }

        result.map(Self::map_conditions)
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude(), days = days.get()))]
    async fn fetch_daily(
        &self,
        location: &Location,
        days: ForecastDays,
    ) -> Result<Vec<WeatherObservation>, ApplicationError> {
        let requested = u8::try_from(days.get()).unwrap_or(u8::MAX);

        let result = self
            .client
            .get_daily(location.latitude(), location.longitude(), requested)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(daily) => {
                debug!(days = daily.len(), "Retrieved daily forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get daily forecast");
            },
        }

        result.map(|daily| daily.into_iter().map(Self::map_conditions).collect())
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn config() -> WeatherConfig {
        WeatherConfig {
            api_key: SecretString::from("key".to_string()),
            ..WeatherConfig::default()
        }
    }

    #[test]
    fn with_config_creates_adapter() {
        assert!(WeatherAdapter::with_config(config()).is_ok());
    }

    #[test]
    fn missing_key_is_configuration_error() {
        let result = WeatherAdapter::with_config(WeatherConfig::default());
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn debug_impl() {
        let adapter = WeatherAdapter::with_config(config()).unwrap();
        let debug_str = format!("{adapter:?}");
        assert!(debug_str.contains("WeatherAdapter"));
        assert!(!debug_str.contains("\"key\""));
    }

    #[test]
    fn map_error_quota() {
        let app_err = WeatherAdapter::map_error(WeatherError::RequestsExceeded);
        assert_eq!(app_err, ApplicationError::Provider(ProviderError::QuotaExceeded));
    }

    #[test]
    fn map_error_invalid_key() {
        let app_err = WeatherAdapter::map_error(WeatherError::InvalidApiKey);
        assert_eq!(
            app_err,
            ApplicationError::Provider(ProviderError::InvalidCredentials)
        );
    }

    #[test]
    fn map_error_invalid_coords() {
        let app_err = WeatherAdapter::map_error(WeatherError::InvalidCoordinates);
        assert_eq!(
            app_err,
            ApplicationError::Provider(ProviderError::InvalidCoordinates)
        );
    }

    #[test]
    fn map_error_transport_is_api() {
        let app_err = WeatherAdapter::map_error(WeatherError::RequestFailed("timeout".into()));
        assert_eq!(
            app_err,
            ApplicationError::Provider(ProviderError::Api("timeout".into()))
        );
    }

    #[test]
    fn map_conditions_copies_fields() {
        let obs = WeatherAdapter::map_conditions(Conditions {
            text: "Hail".to_string(),
            temperature_celsius: 12.5,
            real_feel_phrase: "Chilly".to_string(),
            relative_humidity: 80.0,
            wind_speed_kmh: 30.0,
            precipitation_mm: 3.2,
            has_precipitation: true,
        });

        assert_eq!(obs.condition_text, "Hail");
        assert_eq!(obs.feels_like_phrase, "Chilly");
        assert!((obs.humidity_percent - 80.0).abs() < f64::EPSILON);
        assert!((obs.precipitation_mm - 3.2).abs() < f64::EPSILON);
        assert!(obs.has_precipitation);
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WeatherAdapter>();
    }
}
