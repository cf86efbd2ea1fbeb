use axum::{extract::State, Json};

use crate::api::{state::AppState, types::HealthResponse};

/// GET /health -- liveness probe with dataset sizes
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = &state.store;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime_seconds(),
        loaded_at: store.loaded_at(),
        matches: store.matches().len(),
        deliveries: store.deliveries().len(),
        extras_type: store.has_extras_type(),
    })
}
