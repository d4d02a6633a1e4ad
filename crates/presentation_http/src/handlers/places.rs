//! Known places handler

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Places the dashboard can offer for start, intermediate and end fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesResponse {
    /// Sorted place names
    pub places: Vec<String>,
}

/// List every place in the coordinates table
pub async fn list_places(State(state): State<AppState>) -> Json<PlacesResponse> {
    Json(PlacesResponse {
        places: state.route_service.places(),
    })
}
