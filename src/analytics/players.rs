use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{DataStore, TeamFilter};

/// Entries per leaderboard
pub const TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatsmanRuns {
    pub name: String,
    pub runs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlerWickets {
    pub name: String,
    pub wickets: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPlayers {
    pub top_batsmen: Vec<BatsmanRuns>,
    pub top_bowlers: Vec<BowlerWickets>,
}

/// Highest totals first; equal totals fall back to name order
fn leaders(totals: HashMap<&str, u64>) -> Vec<(String, u64)> {
    let mut ranked: Vec<(&str, u64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(TOP_N)
        .map(|(name, total)| (name.to_string(), total))
        .collect()
}

/// Run scorers while the team batted and wicket takers while it bowled.
/// Run outs are not credited to the bowler. An unknown team yields empty lists.
pub fn top_players(store: &DataStore, team: &TeamFilter) -> TopPlayers {
    let mut runs: HashMap<&str, u64> = HashMap::new();
    let mut wickets: HashMap<&str, u64> = HashMap::new();

    for ball in store.deliveries() {
        if team.batted(ball) {
            *runs.entry(ball.striker.as_str()).or_insert(0) += u64::from(ball.runs_off_bat);
        }
        if team.bowled(ball) && ball.is_bowler_wicket() {
            *wickets.entry(ball.bowler.as_str()).or_insert(0) += 1;
        }
    }

    TopPlayers {
        top_batsmen: leaders(runs)
            .into_iter()
            .map(|(name, runs)| BatsmanRuns { name, runs })
            .collect(),
        top_bowlers: leaders(wickets)
            .into_iter()
            .map(|(name, wickets)| BowlerWickets { name, wickets })
            .collect(),
    }
}
