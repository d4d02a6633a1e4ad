//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// The same place appears twice in a route
    #[error("Duplicate place in route: {0}")]
    DuplicatePlace(String),

    /// Route has no usable start/end or fewer than two places
    #[error("Route needs a start and an end place")]
    EmptyRoute,

    /// Forecast window is not a positive number of days
    #[error("Invalid number of forecast days: {0}")]
    InvalidDays(i64),

    /// Unknown chart metric name
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
}

impl DomainError {
    /// Check whether this error was caused by user input rather than configuration
    pub const fn is_user_input(&self) -> bool {
        !matches!(self, Self::InvalidCoordinates { .. })
    }
}
