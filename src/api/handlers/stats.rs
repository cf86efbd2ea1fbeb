use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, info};

use crate::analytics::{team_summary, top_players, TeamSummary, TopPlayers};
use crate::api::{error::ApiResult, state::AppState, types::TeamQuery};

/// GET /analytics?team=Mumbai%20Indians
pub async fn get_analytics(
    State(state): State<AppState>,
    Query(query): Query<TeamQuery>,
) -> ApiResult<TeamSummary> {
    let team = query.filter();
    info!(%team, "analytics requested");

    let summary = team_summary(&state.store, &team)?;
    debug!(%team, ?summary, "analytics computed");
    Ok(Json(summary))
}

/// GET /top-players?team=Mumbai%20Indians
pub async fn get_top_players(
    State(state): State<AppState>,
    Query(query): Query<TeamQuery>,
) -> Json<TopPlayers> {
    let team = query.filter();
    Json(top_players(&state.store, &team))
}
