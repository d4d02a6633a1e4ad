//! Domain layer for Routecast
//!
//! Contains the route and weather vocabulary: locations, observations,
//! validated routes and the per-metric series derived from a forecast.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
