//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Dashboard API (v1)
        .route("/v1/places", get(handlers::places::list_places))
        .route(
            "/v1/route-forecast",
            post(handlers::route_forecast::route_forecast),
        )
        // Attach state
        .with_state(state)
}
