//! Routecast HTTP presentation layer
//!
//! JSON API behind the route weather dashboard: list the known places and
//! plan a route forecast with per-day verdicts and chart data.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{RequestIdLayer, ValidatedJson, ValidationError};
pub use routes::create_router;
pub use state::AppState;
