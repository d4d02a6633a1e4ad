//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Failure categories reported by the weather provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Request quota for the API key is used up
    #[error("Weather provider quota exceeded")]
    QuotaExceeded,

    /// API key missing or rejected
    #[error("Weather provider rejected the API key")]
    InvalidCredentials,

    /// Provider could not handle the coordinates
    #[error("Weather provider rejected the coordinates")]
    InvalidCoordinates,

    /// Any other provider or transport failure
    #[error("Weather provider error: {0}")]
    Api(String),
}

/// Errors that can occur in the application layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    /// Domain-level validation error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Place name missing from the coordinates table
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    /// Weather provider failure
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error was caused by the request itself
    pub const fn is_client_error(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_user_input(),
            Self::PlaceNotFound(_) => true,
            Self::Provider(_) | Self::Configuration(_) | Self::Internal(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::EmptyRoute.into();
        assert_eq!(err.to_string(), DomainError::EmptyRoute.to_string());
    }

    #[test]
    fn provider_error_converts() {
        let err: ApplicationError = ProviderError::QuotaExceeded.into();
        assert!(matches!(
            err,
            ApplicationError::Provider(ProviderError::QuotaExceeded)
        ));
        assert_eq!(err.to_string(), "Weather provider quota exceeded");
    }

    #[test]
    fn place_not_found_names_place() {
        let err = ApplicationError::PlaceNotFound("Atlantis".to_string());
        assert_eq!(err.to_string(), "Place not found: Atlantis");
    }

    #[test]
    fn client_error_classification() {
        assert!(ApplicationError::PlaceNotFound("X".into()).is_client_error());
        assert!(ApplicationError::Domain(DomainError::InvalidDays(0)).is_client_error());
        assert!(!ApplicationError::Provider(ProviderError::InvalidCredentials).is_client_error());
        assert!(!ApplicationError::Internal("boom".into()).is_client_error());
    }
}
