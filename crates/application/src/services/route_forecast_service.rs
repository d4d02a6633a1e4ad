//! Route forecast service
//!
//! Builds a validated route, fetches a forecast for every place on it and
//! turns the result into per-day verdicts and per-metric chart series.

use std::fmt;
use std::sync::Arc;

use domain::{ForecastDays, ForecastSeries, Location, Route, WeatherObservation};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::weather_classifier::{TravelConcern, WeatherClassifier, WeatherReport};
use crate::error::ApplicationError;
use crate::ports::{LocationPort, WeatherPort};

/// Observations for one place, in day order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceForecast {
    pub name: String,
    pub observations: Vec<WeatherObservation>,
}

/// Forecast for a whole route, places in route order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteForecast {
    pub days: ForecastDays,
    pub places: Vec<PlaceForecast>,
}

/// Classification of a single forecast day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayVerdict {
    /// 1-based day index
    pub day: usize,
    pub is_bad: bool,
    pub concern: Option<TravelConcern>,
    pub report: WeatherReport,
}

/// Verdicts for one place
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceVerdicts {
    pub name: String,
    pub days: Vec<DayVerdict>,
}

/// Chart series for one place
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceSeries {
    pub name: String,
    pub series: ForecastSeries,
}

/// Everything a front-end needs to present a route forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub route: Route,
    pub forecast: RouteForecast,
    pub verdicts: Vec<PlaceVerdicts>,
    pub series: Vec<PlaceSeries>,
}

/// Route forecast use case
pub struct RouteForecastService {
    locations: Arc<dyn LocationPort>,
    weather: Arc<dyn WeatherPort>,
    classifier: WeatherClassifier,
}

impl fmt::Debug for RouteForecastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteForecastService")
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

impl RouteForecastService {
    /// Create a new service
    pub fn new(
        locations: Arc<dyn LocationPort>,
        weather: Arc<dyn WeatherPort>,
        classifier: WeatherClassifier,
    ) -> Self {
        Self {
            locations,
            weather,
            classifier,
        }
    }

    /// Classifier used for verdicts and reports
    pub const fn classifier(&self) -> &WeatherClassifier {
        &self.classifier
    }

    /// Known place names, sorted
    pub fn places(&self) -> Vec<String> {
        self.locations.places()
    }

    /// Whether the weather provider is reachable
    pub async fn is_provider_available(&self) -> bool {
        self.weather.is_available().await
    }

    /// Validate an ordered list of place names into a route
    pub fn build_route<I, S>(&self, names: I) -> Result<Route, ApplicationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Route::build(names)?)
    }

    /// Fetch `days` days of weather for every place on the route
    ///
    /// All places are resolved before the provider is called. Places are
    /// fetched one after another in route order and the first failure
    /// aborts the request.
    #[instrument(skip(self, route), fields(places = route.len()))]
    pub async fn fetch_route_forecast(
        &self,
        route: &Route,
        days: i64,
    ) -> Result<RouteForecast, ApplicationError> {
        let days = ForecastDays::new(days)?;

        let resolved = self.resolve_all(route)?;

        let mut places = Vec::with_capacity(resolved.len());
        for (name, location) in resolved {
            let observations = self.fetch_place(name, &location, days).await?;
            places.push(PlaceForecast {
                name: name.to_string(),
                observations,
            });
        }

        info!(places = places.len(), days = days.get(), "Route forecast fetched");
        Ok(RouteForecast { days, places })
    }

    fn resolve_all<'r>(
        &self,
        route: &'r Route,
    ) -> Result<Vec<(&'r str, Location)>, ApplicationError> {
        route
            .places()
            .iter()
            .map(|name| {
                self.locations
                    .resolve(name)
                    .map(|location| (name.as_str(), location))
                    .ok_or_else(|| {
                        warn!(place = %name, "Place not in coordinates table");
                        ApplicationError::PlaceNotFound(name.clone())
                    })
            })
            .collect()
    }

    async fn fetch_place(
        &self,
        name: &str,
        location: &Location,
        days: ForecastDays,
    ) -> Result<Vec<WeatherObservation>, ApplicationError> {
        if days.is_current_only() {
            let current = self.weather.fetch_current(location).await?;
            debug!(place = %name, "Fetched current conditions");
            return Ok(vec![current]);
        }

        let mut observations = self.weather.fetch_daily(location, days).await?;
        observations.truncate(days.as_len());
        if observations.len() < days.as_len() {
            warn!(
                place = %name,
                requested = days.get(),
                delivered = observations.len(),
                "Provider delivered fewer days than requested"
            );
        }
        debug!(place = %name, days = observations.len(), "Fetched daily forecast");
        Ok(observations)
    }

    /// Classify every day of every place and render its report
    pub fn classify_and_format(&self, forecast: &RouteForecast) -> Vec<PlaceVerdicts> {
        forecast
            .places
            .iter()
            .map(|place| PlaceVerdicts {
                name: place.name.clone(),
                days: place
                    .observations
                    .iter()
                    .enumerate()
                    .map(|(i, obs)| {
                        let concern = self.classifier.assess(obs);
                        DayVerdict {
                            day: i + 1,
                            is_bad: concern.is_some(),
                            concern,
                            report: self.classifier.render_report(obs),
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    /// Reshape the forecast into per-metric series, at most `days` long
    pub fn to_series(&self, forecast: &RouteForecast, days: usize) -> Vec<PlaceSeries> {
        forecast
            .places
            .iter()
            .map(|place| PlaceSeries {
                name: place.name.clone(),
                series: ForecastSeries::from_observations(&place.observations, days),
            })
            .collect()
    }

    /// Build, fetch, classify and chart a route in one call
    pub async fn plan<I, S>(&self, names: I, days: i64) -> Result<RoutePlan, ApplicationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let route = self.build_route(names)?;
        self.plan_route(route, days).await
    }

    /// Fetch, classify and chart an already validated route
    pub async fn plan_route(&self, route: Route, days: i64) -> Result<RoutePlan, ApplicationError> {
        let forecast = self.fetch_route_forecast(&route, days).await?;
        let verdicts = self.classify_and_format(&forecast);
        let series = self.to_series(&forecast, forecast.days.as_len());

        Ok(RoutePlan {
            route,
            forecast,
            verdicts,
            series,
        })
    }
}
