use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

use crate::analytics::{chart_series, ChartSeries};
use crate::api::{error::ApiResult, state::AppState, types::TeamQuery};
use crate::charts::{render_team_charts, ChartImages};
use crate::error::CreaseError;

/// GET /visuals?team=Mumbai%20Indians
///
/// Rendering is CPU-bound, so it runs on the blocking pool.
pub async fn get_visuals(
    State(state): State<AppState>,
    Query(query): Query<TeamQuery>,
) -> ApiResult<ChartImages> {
    let team = query.filter();
    info!(%team, "charts requested");

    let store = state.store.clone();
    let images = tokio::task::spawn_blocking(move || render_team_charts(&store, &team))
        .await
        .map_err(CreaseError::from)??;
    Ok(Json(images))
}

/// GET /chart-data?team=Mumbai%20Indians
pub async fn get_chart_data(
    State(state): State<AppState>,
    Query(query): Query<TeamQuery>,
) -> ApiResult<ChartSeries> {
    let team = query.filter();
    Ok(Json(chart_series(&state.store, &team)?))
}
