use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::{DataStore, Delivery, TeamFilter};
use crate::error::Result;

/// Headline numbers shown on the dashboard's stat cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    #[serde(rename = "Total Matches")]
    pub total_matches: u64,
    #[serde(rename = "Total Runs")]
    pub total_runs: u64,
    #[serde(rename = "Total Wickets")]
    pub total_wickets: u64,
    #[serde(rename = "Total Fours")]
    pub total_fours: u64,
    #[serde(rename = "Total Sixes")]
    pub total_sixes: u64,
    #[serde(rename = "Average Run Rate")]
    pub average_run_rate: f64,
}

/// Runs per six balls, rounded to two decimals; zero when no balls were bowled
pub fn run_rate(total_runs: u64, total_balls: u64) -> f64 {
    if total_balls == 0 {
        return 0.0;
    }
    let rate = total_runs as f64 / (total_balls as f64 / 6.0);
    (rate * 100.0).round() / 100.0
}

fn summarize(deliveries: &[&Delivery]) -> TeamSummary {
    let mut matches = HashSet::new();
    let mut total_runs = 0u64;
    let mut total_wickets = 0u64;
    let mut total_fours = 0u64;
    let mut total_sixes = 0u64;

    for ball in deliveries {
        matches.insert(ball.match_id.as_str());
        total_runs += u64::from(ball.runs_off_bat);
        total_wickets += u64::from(ball.is_wicket());
        total_fours += u64::from(ball.is_four());
        total_sixes += u64::from(ball.is_six());
    }

    TeamSummary {
        total_matches: matches.len() as u64,
        total_runs,
        total_wickets,
        total_fours,
        total_sixes,
        average_run_rate: run_rate(total_runs, deliveries.len() as u64),
    }
}

/// Aggregate every delivery the team batted or bowled in
pub fn team_summary(store: &DataStore, team: &TeamFilter) -> Result<TeamSummary> {
    let deliveries = store.require_deliveries(team)?;
    Ok(summarize(&deliveries))
}
