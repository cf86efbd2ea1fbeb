//! PNG rendering of the dashboard charts.
//!
//! Each chart is drawn from its precomputed series into its own bitmap.
//! A chart that fails to render is logged and left out of the response;
//! the request only fails when no chart could be produced.

pub mod bar;
pub mod canvas;
pub mod histogram;
pub mod palette;
pub mod pie;
pub mod violin;

use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::analytics::{chart_series, ChartSeries};
use crate::domain::{DataStore, TeamFilter};
use crate::error::{CreaseError, Result};

pub const RUNS_HISTOGRAM: &str = "runs_histogram";
pub const RUNS_PIECHART: &str = "runs_piechart";
pub const EXTRAS_COUNT: &str = "extras_count";
pub const RUNS_VIOLIN: &str = "runs_violin";

/// Chart name to base64-encoded PNG
pub type ChartImages = BTreeMap<String, String>;

/// Render every chart the series supports
pub fn render_charts(series: &ChartSeries) -> Result<ChartImages> {
    let team = series.team.as_str();

    let mut attempts: Vec<(&str, Result<Vec<u8>>)> = vec![
        (RUNS_HISTOGRAM, histogram::render(team, &series.runs_histogram)),
        (RUNS_PIECHART, pie::render(team, &series.runs_by_innings)),
    ];
    if let Some(extras) = &series.extras_count {
        attempts.push((EXTRAS_COUNT, bar::render(team, extras)));
    }
    attempts.push((RUNS_VIOLIN, violin::render(team, &series.runs_violin)));

    let mut images = ChartImages::new();
    let mut last_error = None;
    for (name, outcome) in attempts {
        match outcome {
            Ok(png) => {
                debug!(chart = name, bytes = png.len(), "chart rendered");
                images.insert(name.to_string(), canvas::to_base64(&png));
            }
            Err(e) => {
                warn!(chart = name, error = %e, "chart skipped");
                last_error = Some(e);
            }
        }
    }

    match (images.is_empty(), last_error) {
        (true, Some(e)) => Err(e),
        (true, None) => Err(CreaseError::Internal("no charts to render".to_string())),
        _ => Ok(images),
    }
}

/// Filter, aggregate and render the team's charts
pub fn render_team_charts(store: &DataStore, team: &TeamFilter) -> Result<ChartImages> {
    let series = chart_series(store, team)?;
    render_charts(&series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::series::{ExtrasCount, RunsHistogram};
    use crate::domain::delivery::delivery;
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn store(with_extras: bool) -> DataStore {
        let mut balls = Vec::new();
        for (i, runs) in [0, 1, 1, 2, 4, 6, 0, 1].into_iter().enumerate() {
            let mut ball = delivery("1", "A", "B", "p1", "q1", runs, None);
            ball.innings = if i % 2 == 0 { 1 } else { 2 };
            if i == 3 {
                ball.extras_type = Some("legbyes".to_string());
            }
            balls.push(ball);
        }
        DataStore::new(Vec::new(), balls, with_extras)
    }

    #[test]
    fn test_render_team_charts_produces_pngs() {
        let images = render_team_charts(&store(true), &TeamFilter::All).unwrap();
        let names: Vec<&str> = images.keys().map(String::as_str).collect();
        assert_eq!(names, vec![EXTRAS_COUNT, RUNS_HISTOGRAM, RUNS_PIECHART, RUNS_VIOLIN]);
        for encoded in images.values() {
            let png = BASE64.decode(encoded).unwrap();
            assert!(png.starts_with(PNG_SIGNATURE));
        }
    }

    #[test]
    fn test_extras_chart_needs_column() {
        let images = render_team_charts(&store(false), &TeamFilter::All).unwrap();
        assert!(!images.contains_key(EXTRAS_COUNT));
        assert_eq!(images.len(), 3);
    }

    #[test]
    fn test_failed_chart_is_isolated() {
        let mut series = chart_series(&store(true), &TeamFilter::All).unwrap();
        // nothing to slice: the pie chart fails on its own
        series.runs_by_innings.clear();
        series.extras_count = Some(vec![ExtrasCount {
            kind: "wides".to_string(),
            count: 3,
        }]);

        let images = render_charts(&series).unwrap();
        assert!(!images.contains_key(RUNS_PIECHART));
        assert!(images.contains_key(RUNS_HISTOGRAM));
        assert!(images.contains_key(EXTRAS_COUNT));
    }

    #[test]
    fn test_all_charts_failing_is_an_error() {
        let mut series = chart_series(&store(false), &TeamFilter::All).unwrap();
        series.runs_histogram = RunsHistogram {
            bins: Vec::new(),
            density: Vec::new(),
        };
        series.runs_by_innings.clear();
        series.runs_violin.clear();

        let err = render_charts(&series).unwrap_err();
        assert!(matches!(err, CreaseError::Chart { .. }), "{err}");
    }

    #[test]
    fn test_unknown_team_has_no_charts() {
        let err = render_team_charts(&store(true), &TeamFilter::Team("Z".to_string())).unwrap_err();
        assert!(err.is_no_data());
    }
}
