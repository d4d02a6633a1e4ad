//! Weather provider port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::{ForecastDays, Location, WeatherObservation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather provider operations
///
/// Failures are reported as `ApplicationError::Provider`; adapters do not
/// retry on behalf of the caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a location
    async fn fetch_current(
        &self,
        location: &Location,
    ) -> Result<WeatherObservation, ApplicationError>;

    /// Get daily observations, one per day in day order
    ///
    /// The provider may deliver fewer days than requested.
    async fn fetch_daily(
        &self,
        location: &Location,
        days: ForecastDays,
    ) -> Result<Vec<WeatherObservation>, ApplicationError>;

    /// Check if the weather provider is reachable
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
