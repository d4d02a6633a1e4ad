//! Weather data models
//!
//! Wire types for the AccuWeather API and the flattened [`Conditions`]
//! value handed to callers.

use serde::{Deserialize, Serialize};

/// Weather conditions for a point in time or a forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    /// Localized condition text (e.g. "Partly sunny")
    pub text: String,
    /// Air temperature in °C (daily maximum for forecasts)
    pub temperature_celsius: f64,
    /// Localized RealFeel phrase (e.g. "Pleasant")
    pub real_feel_phrase: String,
    /// Relative humidity in percent
    pub relative_humidity: f64,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Liquid precipitation in mm
    pub precipitation_mm: f64,
    /// Whether precipitation is reported
    pub has_precipitation: bool,
}

/// Response of the geoposition search endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct GeopositionResponse {
    pub key: String,
}

/// Scalar with optional phrase, as used throughout the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Measurement {
    pub value: f64,
    #[serde(default)]
    pub phrase: Option<String>,
}

/// Value reported in both unit systems; only the metric one is read
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct UnitPair {
    pub metric: Measurement,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CurrentWind {
    pub speed: UnitPair,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct PrecipitationSummary {
    pub precipitation: UnitPair,
}

/// One entry of the current conditions array
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CurrentConditionsItem {
    pub weather_text: String,
    pub temperature: UnitPair,
    pub real_feel_temperature_shade: UnitPair,
    #[serde(default)]
    pub relative_humidity: Option<f64>,
    pub wind: CurrentWind,
    pub precipitation_summary: PrecipitationSummary,
    pub has_precipitation: bool,
}

impl From<CurrentConditionsItem> for Conditions {
    fn from(item: CurrentConditionsItem) -> Self {
        Self {
            text: item.weather_text,
            temperature_celsius: item.temperature.metric.value,
            real_feel_phrase: item.real_feel_temperature_shade.metric.phrase.unwrap_or_default(),
            relative_humidity: item.relative_humidity.unwrap_or_default(),
            wind_speed_kmh: item.wind.speed.metric.value,
            precipitation_mm: item.precipitation_summary.precipitation.metric.value,
            has_precipitation: item.has_precipitation,
        }
    }
}

/// Response of the daily forecast endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DailyForecastResponse {
    pub daily_forecasts: Vec<DailyForecastItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct TemperatureRange {
    pub maximum: Measurement,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct HumidityRange {
    pub average: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DayWind {
    pub speed: Measurement,
}

/// Daytime half of a forecast day
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DayPart {
    pub short_phrase: String,
    pub has_precipitation: bool,
    #[serde(default)]
    pub relative_humidity: Option<HumidityRange>,
    pub wind: DayWind,
    pub total_liquid: Measurement,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DailyForecastItem {
    pub temperature: TemperatureRange,
    pub real_feel_temperature: TemperatureRange,
    pub day: DayPart,
}

impl From<DailyForecastItem> for Conditions {
    fn from(item: DailyForecastItem) -> Self {
        Self {
            text: item.day.short_phrase,
            temperature_celsius: item.temperature.maximum.value,
            real_feel_phrase: item.real_feel_temperature.maximum.phrase.unwrap_or_default(),
            relative_humidity: item.day.relative_humidity.map_or(0.0, |h| h.average),
            wind_speed_kmh: item.day.wind.speed.value,
            precipitation_mm: item.day.total_liquid.value,
            has_precipitation: item.day.has_precipitation,
        }
    }
}
