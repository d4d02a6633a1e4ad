//! Application layer - Use cases and orchestration
//!
//! Contains the travel-weather classifier, the route forecast use case and
//! the conversational route dialog, plus the port definitions that
//! infrastructure adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, ProviderError};
pub use ports::*;
pub use services::*;
