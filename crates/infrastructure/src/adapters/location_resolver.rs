//! Static location resolver - Implements LocationPort over a fixed table

use std::collections::BTreeMap;
use std::path::Path;

use application::ports::LocationPort;
use domain::Location;
use tracing::{debug, instrument};

use crate::config::{ConfigError, load_city_table};

/// Place-name lookup backed by the `[city_coordinates]` table
///
/// The table is read once and never changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct StaticLocationResolver {
    places: BTreeMap<String, Location>,
}

impl StaticLocationResolver {
    /// Create a resolver from an already loaded table
    pub const fn new(places: BTreeMap<String, Location>) -> Self {
        Self { places }
    }

    /// Load the table from a TOML file
    ///
    /// # Errors
    ///
    /// Fails when the file is missing, malformed or holds out-of-range
    /// coordinates.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        load_city_table(path).map(Self::new)
    }

    /// Number of known places
    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl FromIterator<(String, Location)> for StaticLocationResolver {
    fn from_iter<T: IntoIterator<Item = (String, Location)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl LocationPort for StaticLocationResolver {
    #[instrument(skip(self))]
    fn resolve(&self, name: &str) -> Option<Location> {
        let found = self.places.get(name).copied();
        if found.is_none() {
            debug!("Unknown place");
        }
        found
    }

    fn places(&self) -> Vec<String> {
        self.places.keys().cloned().collect()
    }
}
