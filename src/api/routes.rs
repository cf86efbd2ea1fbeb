use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // The dashboard is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Team selectors
        .route("/teams", get(handlers::get_teams))
        .route("/filters", get(handlers::get_filters))
        // Per-team statistics
        .route("/analytics", get(handlers::get_analytics))
        .route("/top-players", get(handlers::get_top_players))
        // Charts
        .route("/visuals", get(handlers::get_visuals))
        .route("/chart-data", get(handlers::get_chart_data))
        // System endpoints
        .route("/health", get(handlers::health_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
