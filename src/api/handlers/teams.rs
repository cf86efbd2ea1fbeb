use axum::{extract::State, Json};

use crate::analytics::{filter_options, list_teams, FilterOptions};
use crate::api::state::AppState;

/// GET /teams
pub async fn get_teams(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(list_teams(&state.store))
}

/// GET /filters
pub async fn get_filters(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(filter_options(&state.store))
}
