//! One day's (or the current) weather reading for a location

use serde::{Deserialize, Serialize};

/// Weather conditions as reported by the provider
///
/// One instance per place per day. Numeric fields are expected to be finite;
/// keeping humidity within 0-100 is the provider's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Free-text description, e.g. "light rain"
    pub condition_text: String,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// Qualitative feels-like description, e.g. "pleasant"
    pub feels_like_phrase: String,
    /// Relative humidity in percent
    pub humidity_percent: f64,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Precipitation amount in mm
    pub precipitation_mm: f64,
    /// Whether any precipitation is reported
    pub has_precipitation: bool,
}
