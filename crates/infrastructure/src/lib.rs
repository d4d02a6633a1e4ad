//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the static
//! coordinates table and the AccuWeather-backed weather adapter. Also owns
//! configuration loading and logging setup for the binaries.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ConfigError, Locale, ServerConfig};
pub use telemetry::{LogFormat, TelemetryError, init_logging};
