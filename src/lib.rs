pub mod adapters;
pub mod analytics;
pub mod api;
pub mod charts;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

pub use adapters::{load_store, start_api_server, store_from_readers};
pub use analytics::{
    chart_series, filter_options, list_teams, team_summary, top_players, ChartSeries,
    FilterOptions, TeamSummary, TopPlayers,
};
pub use api::{create_router, AppState};
pub use charts::{render_team_charts, ChartImages};
pub use config::AppConfig;
pub use domain::{DataStore, Delivery, MatchInfo, TeamFilter, ALL_TEAMS};
pub use error::{CreaseError, Result};
