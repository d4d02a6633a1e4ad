//! Route entity
//!
//! An ordered sequence of distinct place names with a defined start and end.
//! A `Route` can only be obtained through [`Route::build`] or
//! [`Route::from_form`], so every instance satisfies:
//!
//! - at least two places,
//! - every name trimmed and non-blank,
//! - no name repeated (case-sensitive comparison after trimming).

use std::collections::HashSet;

use serde::Serialize;

use crate::errors::DomainError;

/// Separator between intermediate places in free-form input
pub const INTERMEDIATE_SEPARATOR: char = ',';

/// Validated ordered list of places
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    places: Vec<String>,
}

impl Route {
    /// Build a route from an ordered list of place names
    ///
    /// Names are trimmed. The first and last entries are the start and end
    /// and must not be blank; blank intermediate entries are skipped.
    ///
    /// # Errors
    ///
    /// - `DomainError::EmptyRoute` if fewer than two names are given or the
    ///   start/end is blank
    /// - `DomainError::DuplicatePlace` if a trimmed name repeats
    pub fn build<I, S>(names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let owned: Vec<S> = names.into_iter().collect();
        let trimmed: Vec<&str> = owned.iter().map(|n| n.as_ref().trim()).collect();
        Self::from_trimmed(&trimmed)
    }

    /// Build a route from dashboard-style fields
    ///
    /// `intermediate` is a comma-separated list and may be empty.
    ///
    /// # Errors
    ///
    /// Same as [`Route::build`].
    pub fn from_form(
        start: &str,
        intermediate: Option<&str>,
        end: &str,
    ) -> Result<Self, DomainError> {
        let mut names = vec![start];
        if let Some(raw) = intermediate {
            names.extend(raw.split(INTERMEDIATE_SEPARATOR));
        }
        names.push(end);
        Self::build(names)
    }

    fn from_trimmed(names: &[&str]) -> Result<Self, DomainError> {
        let (Some(start), Some(end)) = (names.first(), names.last()) else {
            return Err(DomainError::EmptyRoute);
        };
        if names.len() < 2 || start.is_empty() || end.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        let mut seen = HashSet::with_capacity(names.len());
        let mut places = Vec::with_capacity(names.len());
        for name in names.iter().filter(|n| !n.is_empty()) {
            if !seen.insert(*name) {
                return Err(DomainError::DuplicatePlace((*name).to_string()));
            }
            places.push((*name).to_string());
        }

        Ok(Self { places })
    }

    /// All places in travel order
    #[must_use]
    pub fn places(&self) -> &[String] {
        &self.places
    }

    /// Starting place
    #[must_use]
    pub fn start(&self) -> &str {
        &self.places[0]
    }

    /// Final place
    #[must_use]
    pub fn end(&self) -> &str {
        &self.places[self.places.len() - 1]
    }

    /// Places between start and end
    #[must_use]
    pub fn intermediate(&self) -> &[String] {
        &self.places[1..self.places.len() - 1]
    }

    /// Number of places
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the route has no places
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_two_place_route() {
        let route = Route::build(["Moscow", "Kazan"]).expect("valid route");
        assert_eq!(route.places(), &["Moscow", "Kazan"]);
        assert_eq!(route.start(), "Moscow");
        assert_eq!(route.end(), "Kazan");
        assert!(route.intermediate().is_empty());
    }

    #[test]
    fn trims_names() {
        let route = Route::build(["  Moscow", "Omsk ", "\tKazan\n"]).expect("valid route");
        assert_eq!(route.places(), &["Moscow", "Omsk", "Kazan"]);
        assert_eq!(route.intermediate(), &["Omsk"]);
    }

    #[test]
    fn duplicate_after_trim_is_rejected() {
        let err = Route::build(["Moscow", " Moscow "]).unwrap_err();
        assert_eq!(err, DomainError::DuplicatePlace("Moscow".to_string()));
    }

    #[test]
    fn duplicate_comparison_is_case_sensitive() {
        assert!(Route::build(["Moscow", "moscow"]).is_ok());
    }

    #[test]
    fn single_place_is_empty_route() {
        assert_eq!(Route::build(["A"]).unwrap_err(), DomainError::EmptyRoute);
    }

    #[test]
    fn no_places_is_empty_route() {
        assert_eq!(
            Route::build(Vec::<String>::new()).unwrap_err(),
            DomainError::EmptyRoute
        );
    }

    #[test]
    fn blank_start_or_end_is_empty_route() {
        assert_eq!(Route::build(["  ", "B"]).unwrap_err(), DomainError::EmptyRoute);
        assert_eq!(Route::build(["A", ""]).unwrap_err(), DomainError::EmptyRoute);
    }

    #[test]
    fn blank_intermediate_is_skipped() {
        let route = Route::build(["A", " ", "B"]).expect("valid route");
        assert_eq!(route.places(), &["A", "B"]);
    }

    #[test]
    fn from_form_splits_intermediate() {
        let route = Route::from_form("Moscow", Some("Kazan, Omsk"), "Vladivostok").expect("valid");
        assert_eq!(route.places(), &["Moscow", "Kazan", "Omsk", "Vladivostok"]);
    }

    #[test]
    fn from_form_without_intermediate() {
        let route = Route::from_form("Moscow", None, "Kazan").expect("valid");
        assert_eq!(route.len(), 2);
        let route = Route::from_form("Moscow", Some(""), "Kazan").expect("valid");
        assert_eq!(route.len(), 2);
    }

    #[test]
    fn from_form_detects_duplicate_end() {
        let err = Route::from_form("Moscow", Some("Kazan"), "Kazan").unwrap_err();
        assert_eq!(err, DomainError::DuplicatePlace("Kazan".to_string()));
    }
}
