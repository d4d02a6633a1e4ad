//! City coordinates table.
//!
//! Read straight from the TOML file so place names keep their exact case:
//!
//! ```toml
//! [city_coordinates]
//! Moscow = { lat = 55.7558, lon = 37.6173 }
//! "Нижний Новгород" = { lat = 56.3269, lon = 44.0059 }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use domain::Location;
use serde::Deserialize;

use super::ConfigError;

/// Table name inside the configuration file
pub const CITY_TABLE: &str = "city_coordinates";

/// Raw `{ lat, lon }` entry
#[derive(Debug, Clone, Copy, Deserialize)]
struct CityEntry {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct CityFile {
    city_coordinates: Option<BTreeMap<String, CityEntry>>,
}

/// Parse the coordinates table from TOML text
///
/// `origin` names the source in error messages.
pub fn parse_city_table(
    text: &str,
    origin: &str,
) -> Result<BTreeMap<String, Location>, ConfigError> {
    let file: CityFile = toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: origin.to_string(),
        source,
    })?;

    let entries = file
        .city_coordinates
        .ok_or_else(|| ConfigError::MissingCityTable(origin.to_string()))?;

    entries
        .into_iter()
        .map(|(name, entry)| {
            Location::new(entry.lat, entry.lon)
                .map(|location| (name.clone(), location))
                .map_err(|source| ConfigError::InvalidCity { name, source })
        })
        .collect()
}

/// Read and parse the coordinates table from a file
pub fn load_city_table(path: &Path) -> Result<BTreeMap<String, Location>, ConfigError> {
    let origin = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: origin.clone(),
        source,
    })?;
    parse_city_table(&text, &origin)
}
