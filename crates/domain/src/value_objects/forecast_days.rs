//! Forecast window value object

use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

/// Number of forecast days requested, always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ForecastDays(u32);

impl ForecastDays {
    /// Create a validated day count
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDays` for zero, negative or oversized values.
    pub fn new(days: i64) -> Result<Self, DomainError> {
        match u32::try_from(days) {
            Ok(value) if value >= 1 => Ok(Self(value)),
            _ => Err(DomainError::InvalidDays(days)),
        }
    }

    /// Get the number of days
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The window covers only today, so current conditions are enough
    #[must_use]
    pub const fn is_current_only(self) -> bool {
        self.0 == 1
    }

    /// Day count as a length for slicing
    #[must_use]
    pub const fn as_len(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ForecastDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for ForecastDays {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
