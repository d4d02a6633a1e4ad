//! Travel weather classifier
//!
//! Decides whether one day's weather is bad for travel and renders a
//! fixed-order, human-readable report for it. Both operations are pure.
//!
//! Rules are checked in order and the first match wins:
//!
//! 1. temperature outside `[min_temperature_celsius, max_temperature_celsius)`
//! 2. wind speed above `max_wind_speed_kmh`
//! 3. condition text contains a storm keyword
//! 4. precipitation reported and above `max_precipitation_mm`
//! 5. feels-like phrase contains a discomfort keyword
//!
//! Keyword matching is a case-insensitive substring search.

use std::fmt;

use domain::WeatherObservation;
use serde::{Deserialize, Serialize};

/// Soft line break used when a report is embedded in HTML/markdown
pub const HTML_LINE_BREAK: &str = "<br />";

/// Thresholds and trigger keywords for the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierRules {
    /// Lowest acceptable temperature (inclusive)
    #[serde(default = "default_min_temperature")]
    pub min_temperature_celsius: f64,

    /// Temperature at which travel becomes bad (exclusive upper bound)
    #[serde(default = "default_max_temperature")]
    pub max_temperature_celsius: f64,

    /// Highest acceptable wind speed (inclusive)
    #[serde(default = "default_max_wind_speed")]
    pub max_wind_speed_kmh: f64,

    /// Highest acceptable precipitation when precipitation is reported (inclusive)
    #[serde(default = "default_max_precipitation")]
    pub max_precipitation_mm: f64,

    /// Storm-like substrings looked up in the condition text
    #[serde(default = "default_storm_keywords")]
    pub storm_keywords: Vec<String>,

    /// Discomfort substrings looked up in the feels-like phrase
    #[serde(default = "default_discomfort_keywords")]
    pub discomfort_keywords: Vec<String>,
}

const fn default_min_temperature() -> f64 {
    0.0
}

const fn default_max_temperature() -> f64 {
    35.0
}

const fn default_max_wind_speed() -> f64 {
    50.0
}

const fn default_max_precipitation() -> f64 {
    5.0
}

fn default_storm_keywords() -> Vec<String> {
    to_strings(&["thunder", "storm", "hail"])
}

fn default_discomfort_keywords() -> Vec<String> {
    to_strings(&["very", "extreme", "damp", "wet"])
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            min_temperature_celsius: default_min_temperature(),
            max_temperature_celsius: default_max_temperature(),
            max_wind_speed_kmh: default_max_wind_speed(),
            max_precipitation_mm: default_max_precipitation(),
            storm_keywords: default_storm_keywords(),
            discomfort_keywords: default_discomfort_keywords(),
        }
    }
}

impl ClassifierRules {
    /// Rules with Russian keywords, for a provider queried with `language=ru`
    #[must_use]
    pub fn russian() -> Self {
        Self {
            storm_keywords: to_strings(&["гром", "шторм", "град"]),
            discomfort_keywords: to_strings(&["очень", "сыро"]),
            ..Self::default()
        }
    }
}

/// Field labels used in rendered reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLabels {
    pub condition: String,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind_speed: String,
    pub wind_unit: String,
    pub precipitation: String,
    pub precipitation_unit: String,
    /// Shown instead of an amount when no precipitation is reported
    pub no_precipitation: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            condition: "Condition".to_string(),
            temperature: "Temperature".to_string(),
            feels_like: "Feels like".to_string(),
            humidity: "Humidity".to_string(),
            wind_speed: "Wind speed".to_string(),
            wind_unit: "km/h".to_string(),
            precipitation: "Precipitation".to_string(),
            precipitation_unit: "mm".to_string(),
            no_precipitation: "None".to_string(),
        }
    }
}

impl ReportLabels {
    /// Russian labels
    #[must_use]
    pub fn russian() -> Self {
        Self {
            condition: "Состояние".to_string(),
            temperature: "Температура".to_string(),
            feels_like: "Ощущение".to_string(),
            humidity: "Влажность".to_string(),
            wind_speed: "Скорость ветра".to_string(),
            wind_unit: "км/ч".to_string(),
            precipitation: "Осадки".to_string(),
            precipitation_unit: "мм".to_string(),
            no_precipitation: "Нет".to_string(),
        }
    }
}

/// The rule that made a day bad for travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelConcern {
    /// Too cold or too hot
    Temperature,
    /// Strong wind
    Wind,
    /// Thunderstorm, storm or hail
    Storm,
    /// Heavy precipitation
    HeavyPrecipitation,
    /// Unpleasant feels-like conditions
    Discomfort,
}

impl TravelConcern {
    /// Short English description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature out of comfortable range",
            Self::Wind => "strong wind",
            Self::Storm => "storm or hail",
            Self::HeavyPrecipitation => "heavy precipitation",
            Self::Discomfort => "uncomfortable conditions",
        }
    }
}

/// Rendered weather report: one formatted field per line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherReport {
    lines: Vec<String>,
}

impl WeatherReport {
    /// Report lines in fixed order
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join the lines with a caller-chosen separator
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.lines.join(separator)
    }

    /// Join the lines with HTML soft breaks
    #[must_use]
    pub fn to_html(&self) -> String {
        self.join(HTML_LINE_BREAK)
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("\n"))
    }
}

/// Rule-based travel weather classifier
#[derive(Debug, Clone)]
pub struct WeatherClassifier {
    rules: ClassifierRules,
    labels: ReportLabels,
    storm_keywords: Vec<String>,
    discomfort_keywords: Vec<String>,
}

impl Default for WeatherClassifier {
    fn default() -> Self {
        Self::new(ClassifierRules::default(), ReportLabels::default())
    }
}

impl WeatherClassifier {
    /// Create a classifier from rules and report labels
    #[must_use]
    pub fn new(rules: ClassifierRules, labels: ReportLabels) -> Self {
        let lower = |words: &[String]| -> Vec<String> {
            words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };
        let storm_keywords = lower(&rules.storm_keywords);
        let discomfort_keywords = lower(&rules.discomfort_keywords);

        Self {
            rules,
            labels,
            storm_keywords,
            discomfort_keywords,
        }
    }

    /// Active rules
    #[must_use]
    pub const fn rules(&self) -> &ClassifierRules {
        &self.rules
    }

    /// First rule that makes the observation bad for travel, if any
    #[must_use]
    pub fn assess(&self, obs: &WeatherObservation) -> Option<TravelConcern> {
        let rules = &self.rules;

        if obs.temperature_celsius < rules.min_temperature_celsius
            || obs.temperature_celsius >= rules.max_temperature_celsius
        {
            return Some(TravelConcern::Temperature);
        }

        if obs.wind_speed_kmh > rules.max_wind_speed_kmh {
            return Some(TravelConcern::Wind);
        }

        if contains_any(&obs.condition_text, &self.storm_keywords) {
            return Some(TravelConcern::Storm);
        }

        if obs.has_precipitation && obs.precipitation_mm > rules.max_precipitation_mm {
            return Some(TravelConcern::HeavyPrecipitation);
        }

        if contains_any(&obs.feels_like_phrase, &self.discomfort_keywords) {
            return Some(TravelConcern::Discomfort);
        }

        None
    }

    /// Whether the observation is bad for travel
    #[must_use]
    pub fn is_bad_for_travel(&self, obs: &WeatherObservation) -> bool {
        self.assess(obs).is_some()
    }

    /// Render the six-line report for an observation
    #[must_use]
    pub fn render_report(&self, obs: &WeatherObservation) -> WeatherReport {
        let l = &self.labels;
        let precipitation = if obs.has_precipitation {
            format!("{:.1} {}", obs.precipitation_mm, l.precipitation_unit)
        } else {
            l.no_precipitation.clone()
        };

        WeatherReport {
            lines: vec![
                format!("{}: {}", l.condition, obs.condition_text),
                format!("{}: {:.1}°C", l.temperature, obs.temperature_celsius),
                format!("{}: {}", l.feels_like, obs.feels_like_phrase),
                format!("{}: {:.1}%", l.humidity, obs.humidity_percent),
                format!("{}: {:.1} {}", l.wind_speed, obs.wind_speed_kmh, l.wind_unit),
                format!("{}: {precipitation}", l.precipitation),
            ],
        }
    }
}

/// Case-insensitive substring search; `keywords` must already be lowercase
fn contains_any(text: &str, keywords: &[String]) -> bool {
    let text = text.to_lowercase();
    keywords.iter().any(|k| text.contains(k.as_str()))
}
