//! Place name resolution port

use domain::Location;
#[cfg(test)]
use mockall::automock;

/// Port for turning a place name into coordinates
///
/// Implementations are loaded once and read-only afterwards. An unknown name
/// is an expected outcome and yields `None`.
#[cfg_attr(test, automock)]
pub trait LocationPort: Send + Sync {
    /// Resolve a place name (case-sensitive, exact match)
    fn resolve(&self, name: &str) -> Option<Location>;

    /// All known place names, sorted
    fn places(&self) -> Vec<String>;
}
