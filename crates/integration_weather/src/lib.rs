//! AccuWeather integration
//!
//! Client for the AccuWeather API (<https://developer.accuweather.com>).
//! Provides current conditions and daily forecasts for a coordinate pair.
//! Requires an API key.

pub mod client;
mod models;

pub use client::{AccuWeatherClient, FORECAST_PERIODS, WeatherClient, WeatherConfig, WeatherError};
pub use models::Conditions;
