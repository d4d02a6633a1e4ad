//! Chartable weather metrics

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{errors::DomainError, value_objects::WeatherObservation};

/// A numeric metric that can be plotted per forecast day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesMetric {
    /// Temperature in Celsius
    #[default]
    Temperature,
    /// Wind speed in km/h
    WindSpeed,
    /// Precipitation in mm
    Precipitation,
}

impl SeriesMetric {
    /// All metrics in display order
    pub const ALL: [Self; 3] = [Self::Temperature, Self::WindSpeed, Self::Precipitation];

    /// Wire name of the metric
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::WindSpeed => "wind_speed",
            Self::Precipitation => "precipitation",
        }
    }

    /// Unit suffix used on chart axes
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::WindSpeed => "km/h",
            Self::Precipitation => "mm",
        }
    }

    /// Read this metric from an observation
    #[must_use]
    pub fn project(&self, observation: &WeatherObservation) -> f64 {
        match self {
            Self::Temperature => observation.temperature_celsius,
            Self::WindSpeed => observation.wind_speed_kmh,
            Self::Precipitation => observation.precipitation_mm,
        }
    }
}

impl fmt::Display for SeriesMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesMetric {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "temperature" => Ok(Self::Temperature),
            "wind_speed" | "wind" => Ok(Self::WindSpeed),
            "precipitation" => Ok(Self::Precipitation),
            _ => Err(DomainError::UnknownMetric(s.to_string())),
        }
    }
}
