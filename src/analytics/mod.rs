pub mod players;
pub mod series;
pub mod summary;
pub mod teams;

pub use players::{top_players, BatsmanRuns, BowlerWickets, TopPlayers, TOP_N};
pub use series::{chart_series, ChartSeries};
pub use summary::{team_summary, TeamSummary};
pub use teams::{filter_options, list_teams, FilterOptions};
