//! Value Objects - Immutable, identity-less domain primitives

mod forecast_days;
mod forecast_series;
mod location;
mod series_metric;
mod weather_observation;

pub use forecast_days::ForecastDays;
pub use forecast_series::ForecastSeries;
pub use location::Location;
pub use series_metric::SeriesMetric;
pub use weather_observation::WeatherObservation;
