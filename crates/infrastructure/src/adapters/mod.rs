//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod location_resolver;
mod weather_adapter;

pub use location_resolver::StaticLocationResolver;
pub use weather_adapter::WeatherAdapter;
