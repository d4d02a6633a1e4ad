//! Application state shared across handlers

use std::sync::Arc;

use application::RouteForecastService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Route forecast use case
    pub route_service: Arc<RouteForecastService>,
}

impl AppState {
    pub fn new(route_service: RouteForecastService) -> Self {
        Self {
            route_service: Arc::new(route_service),
        }
    }
}
