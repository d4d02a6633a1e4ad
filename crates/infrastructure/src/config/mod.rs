//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `cities`: the `[city_coordinates]` lookup table
//!
//! Weather provider settings reuse [`integration_weather::WeatherConfig`];
//! classifier rules and report labels reuse the application types.
//!
//! Sources are layered: built-in defaults, then the config file (optional),
//! then environment variables prefixed `ROUTECAST_` with `__` between
//! nesting levels (e.g. `ROUTECAST_SERVER__PORT=9000`,
//! `ROUTECAST_WEATHER__API_KEY=...`). The coordinates table is always read
//! from the config file and must be present.

mod cities;
mod server;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use application::{ClassifierRules, ReportLabels, WeatherClassifier};
use domain::{DomainError, Location};
use integration_weather::WeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub use cities::{CITY_TABLE, load_city_table, parse_city_table};
pub use server::ServerConfig;

/// Config file used when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "ROUTECAST";

/// Environment variable consulted when no API key is configured
pub const API_KEY_FALLBACK_ENV: &str = "ACCUWEATHER_API_KEY";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Layered settings could not be built or deserialized
    #[error(transparent)]
    Load(#[from] config::ConfigError),

    /// Config file could not be read
    #[error("Cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML
    #[error("Malformed {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// The coordinates table is absent
    #[error("No [city_coordinates] table in {0}")]
    MissingCityTable(String),

    /// A coordinates entry is out of range
    #[error("City '{name}': {source}")]
    InvalidCity {
        name: String,
        #[source]
        source: DomainError,
    },
}

/// Language of classifier keywords and report labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English keywords and labels
    #[default]
    En,
    /// Russian keywords and labels
    Ru,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Ru => write!(f, "ru"),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Preset for classifier keywords and report labels
    #[serde(default)]
    pub locale: Locale,

    /// Classifier rules; the locale preset when absent
    #[serde(default)]
    pub classifier: Option<ClassifierRules>,

    /// Report labels; the locale preset when absent
    #[serde(default)]
    pub labels: Option<ReportLabels>,

    /// Place name to coordinates, filled from the config file
    #[serde(skip)]
    pub city_coordinates: BTreeMap<String, Location>,
}

impl AppConfig {
    /// Load configuration from `config.toml` and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from the given file and the environment
    ///
    /// # Errors
    ///
    /// Fails when the settings cannot be deserialized, or when the file
    /// is missing, malformed or lacks a valid `[city_coordinates]` table.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        if config.weather.api_key.expose_secret().is_empty() {
            if let Ok(key) = std::env::var(API_KEY_FALLBACK_ENV) {
                debug!("Using API key from {API_KEY_FALLBACK_ENV}");
                config.weather.api_key = SecretString::from(key);
            }
        }

        config.city_coordinates = load_city_table(path)?;

        info!(
            path = %path.display(),
            places = config.city_coordinates.len(),
            locale = %config.locale,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Effective classifier rules
    pub fn classifier_rules(&self) -> ClassifierRules {
        self.classifier.clone().unwrap_or_else(|| match self.locale {
            Locale::En => ClassifierRules::default(),
            Locale::Ru => ClassifierRules::russian(),
        })
    }

    /// Effective report labels
    pub fn report_labels(&self) -> ReportLabels {
        self.labels.clone().unwrap_or_else(|| match self.locale {
            Locale::En => ReportLabels::default(),
            Locale::Ru => ReportLabels::russian(),
        })
    }

    /// Classifier built from the effective rules and labels
    pub fn classifier(&self) -> WeatherClassifier {
        WeatherClassifier::new(self.classifier_rules(), self.report_labels())
    }
}

/// Resolve the config path from an optional override
pub fn config_path(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
