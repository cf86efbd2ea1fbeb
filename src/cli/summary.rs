use serde::Serialize;
use tabled::Tabled;

use super::output::{self, OutputMode};
use crate::analytics::{team_summary, top_players, TeamSummary, TopPlayers};
use crate::domain::{DataStore, TeamFilter};
use crate::error::Result;

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Stat")]
    stat: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct LeaderRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Player")]
    name: String,
    #[tabled(rename = "Total")]
    total: u64,
}

#[derive(Debug, Serialize)]
pub struct TeamReport {
    pub team: String,
    pub analytics: TeamSummary,
    #[serde(flatten)]
    pub players: TopPlayers,
}

pub fn build_report(store: &DataStore, team: &TeamFilter) -> Result<TeamReport> {
    Ok(TeamReport {
        team: team.to_string(),
        analytics: team_summary(store, team)?,
        players: top_players(store, team),
    })
}

fn stat_rows(summary: &TeamSummary) -> Vec<StatRow> {
    vec![
        StatRow {
            stat: "Total Matches",
            value: summary.total_matches.to_string(),
        },
        StatRow {
            stat: "Total Runs",
            value: summary.total_runs.to_string(),
        },
        StatRow {
            stat: "Total Wickets",
            value: summary.total_wickets.to_string(),
        },
        StatRow {
            stat: "Total Fours",
            value: summary.total_fours.to_string(),
        },
        StatRow {
            stat: "Total Sixes",
            value: summary.total_sixes.to_string(),
        },
        StatRow {
            stat: "Average Run Rate",
            value: format!("{:.2}", summary.average_run_rate),
        },
    ]
}

/// Plain-text rendering of a report
pub fn format_report(report: &TeamReport) -> String {
    let batsmen: Vec<LeaderRow> = report
        .players
        .top_batsmen
        .iter()
        .enumerate()
        .map(|(i, b)| LeaderRow {
            rank: i + 1,
            name: b.name.clone(),
            total: b.runs,
        })
        .collect();
    let bowlers: Vec<LeaderRow> = report
        .players
        .top_bowlers
        .iter()
        .enumerate()
        .map(|(i, b)| LeaderRow {
            rank: i + 1,
            name: b.name.clone(),
            total: b.wickets,
        })
        .collect();

    format!(
        "{}\n{}\n\nTop batsmen (runs)\n{}\n\nTop bowlers (wickets)\n{}",
        report.team,
        output::render_table(&stat_rows(&report.analytics)),
        output::render_table(&batsmen),
        output::render_table(&bowlers),
    )
}

/// `crease summary`: print one team's numbers without starting the server
pub fn run_summary(store: &DataStore, team: &TeamFilter, mode: OutputMode) -> anyhow::Result<()> {
    let report = build_report(store, team)?;
    match mode {
        OutputMode::Table => println!("{}", format_report(&report)),
        OutputMode::Json => output::print_json(&report)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::delivery::delivery;

    #[test]
    fn test_format_report() {
        let store = DataStore::new(
            Vec::new(),
            vec![
                delivery("1", "A", "B", "p1", "q1", 4, None),
                delivery("1", "A", "B", "p2", "q1", 6, Some("caught")),
            ],
            false,
        );
        let report = build_report(&store, &TeamFilter::Team("A".to_string())).unwrap();
        let text = format_report(&report);

        assert!(text.starts_with("A\n"));
        assert!(text.contains("Average Run Rate"));
        assert!(text.contains("30.00"));
        assert!(text.contains("p2"));
        // A never bowled
        assert!(text.ends_with("(no results)"));
    }

    #[test]
    fn test_report_json_flattens_players() {
        let store = DataStore::new(
            Vec::new(),
            vec![delivery("1", "A", "B", "p1", "q1", 1, None)],
            false,
        );
        let report = build_report(&store, &TeamFilter::All).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["team"], "All Teams");
        assert_eq!(json["analytics"]["Total Runs"], 1);
        assert!(json["top_batsmen"].is_array());
    }

    #[test]
    fn test_unknown_team_report_fails() {
        let store = DataStore::new(Vec::new(), Vec::new(), false);
        assert!(build_report(&store, &TeamFilter::All).is_err());
    }
}
