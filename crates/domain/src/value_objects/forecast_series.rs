//! Per-place numeric series for charting

use serde::Serialize;

use crate::value_objects::{SeriesMetric, WeatherObservation};

/// One numeric sequence per metric, indexed by forecast day
///
/// All three sequences always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ForecastSeries {
    temperature: Vec<f64>,
    wind_speed: Vec<f64>,
    precipitation: Vec<f64>,
}

impl ForecastSeries {
    /// Project the first `days` observations into per-metric sequences
    ///
    /// When fewer observations are available the sequences are shorter;
    /// nothing is padded.
    #[must_use]
    pub fn from_observations(observations: &[WeatherObservation], days: usize) -> Self {
        let window = &observations[..days.min(observations.len())];
        let collect = |metric: SeriesMetric| -> Vec<f64> {
            window.iter().map(|o| metric.project(o)).collect()
        };

        Self {
            temperature: collect(SeriesMetric::Temperature),
            wind_speed: collect(SeriesMetric::WindSpeed),
            precipitation: collect(SeriesMetric::Precipitation),
        }
    }

    /// Sequence for a single metric
    #[must_use]
    pub fn get(&self, metric: SeriesMetric) -> &[f64] {
        match metric {
            SeriesMetric::Temperature => &self.temperature,
            SeriesMetric::WindSpeed => &self.wind_speed,
            SeriesMetric::Precipitation => &self.precipitation,
        }
    }

    /// Number of days covered
    #[must_use]
    pub fn len(&self) -> usize {
        self.temperature.len()
    }

    /// Whether no day is covered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
    }
}
