//! Aggregated series behind the dashboard charts.
//!
//! The PNG renderer in `crate::charts` draws from these, and `/chart-data`
//! returns them as JSON for clients that prefer to draw charts themselves.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::domain::{DataStore, Delivery, TeamFilter};
use crate::error::Result;

pub const HISTOGRAM_BINS: usize = 15;
const HISTOGRAM_KDE_POINTS: usize = 100;
const VIOLIN_KDE_POINTS: usize = 64;
/// Violin tails extend this many bandwidths past the data
const VIOLIN_CUT: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunsHistogram {
    pub bins: Vec<HistogramBin>,
    /// Kernel density scaled to bin counts; empty when the data has no spread
    pub density: Vec<DensityPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InningsRuns {
    pub innings: u32,
    pub runs: u64,
    /// Percentage of all runs in the selection
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtrasCount {
    pub kind: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolinSeries {
    pub innings: u32,
    pub balls: u64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Unscaled density over runs; empty when every ball scored the same
    pub density: Vec<DensityPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub team: String,
    pub runs_histogram: RunsHistogram,
    pub runs_by_innings: Vec<InningsRuns>,
    /// `None` when the ball-by-ball data has no extras column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras_count: Option<Vec<ExtrasCount>>,
    pub runs_violin: Vec<ViolinSeries>,
}

/// Equal-width bins over `[min, max]`, last bin closed on the right.
/// A constant sample gets a unit-wide range centred on the value.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let (mut lo, mut hi) = min_max(values);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0u64; bins];
    for &value in values {
        let idx = (((value - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count,
        })
        .collect()
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Gaussian KDE bandwidth with Scott's rule; `None` for fewer than two
/// points or zero variance
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std = variance.sqrt();
    if std <= f64::EPSILON {
        return None;
    }
    Some(std * (n as f64).powf(-0.2))
}

/// Density at each grid point; integrates to one over the real line
pub fn gaussian_kde(values: &[f64], bandwidth: f64, grid: &[f64]) -> Vec<f64> {
    let norm = 1.0 / (values.len() as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    grid.iter()
        .map(|&x| {
            values
                .iter()
                .map(|&v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm
        })
        .collect()
}

fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    if points < 2 {
        return vec![start];
    }
    let step = (end - start) / (points - 1) as f64;
    (0..points).map(|i| start + step * i as f64).collect()
}

/// Linear-interpolated quantile of sorted values, `q` in `[0, 1]`
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

fn runs_histogram(values: &[f64]) -> RunsHistogram {
    let bins = histogram(values, HISTOGRAM_BINS);
    let density = match (scott_bandwidth(values), bins.first(), bins.last()) {
        (Some(bw), Some(first), Some(last)) => {
            let grid = linspace(first.start, last.end, HISTOGRAM_KDE_POINTS);
            // scale so the curve sits on the count axis
            let scale = values.len() as f64 * (first.end - first.start);
            gaussian_kde(values, bw, &grid)
                .into_iter()
                .zip(grid)
                .map(|(density, x)| DensityPoint {
                    x,
                    y: density * scale,
                })
                .collect()
        }
        _ => Vec::new(),
    };
    RunsHistogram { bins, density }
}

fn runs_by_innings(deliveries: &[&Delivery]) -> Vec<InningsRuns> {
    let mut totals: BTreeMap<u32, u64> = BTreeMap::new();
    for ball in deliveries {
        *totals.entry(ball.innings).or_insert(0) += u64::from(ball.runs_off_bat);
    }
    let grand_total: u64 = totals.values().sum();

    totals
        .into_iter()
        .map(|(innings, runs)| InningsRuns {
            innings,
            runs,
            share: if grand_total == 0 {
                0.0
            } else {
                runs as f64 * 100.0 / grand_total as f64
            },
        })
        .collect()
}

/// Counts per extras category, most frequent first
fn extras_count(deliveries: &[&Delivery]) -> Vec<ExtrasCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for kind in deliveries.iter().filter_map(|ball| ball.extras_kind()) {
        *counts.entry(kind).or_insert(0) += 1;
    }

    let mut counts: Vec<ExtrasCount> = counts
        .into_iter()
        .map(|(kind, count)| ExtrasCount {
            kind: kind.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.kind.cmp(&b.kind)));
    counts
}

fn violin(innings: u32, mut values: Vec<f64>) -> ViolinSeries {
    values.sort_by(|a, b| a.total_cmp(b));

    let density = match scott_bandwidth(&values) {
        Some(bw) => {
            let (lo, hi) = min_max(&values);
            let grid = linspace(lo - VIOLIN_CUT * bw, hi + VIOLIN_CUT * bw, VIOLIN_KDE_POINTS);
            gaussian_kde(&values, bw, &grid)
                .into_iter()
                .zip(grid)
                .map(|(y, x)| DensityPoint { x, y })
                .collect()
        }
        None => Vec::new(),
    };

    ViolinSeries {
        innings,
        balls: values.len() as u64,
        min: values.first().copied().unwrap_or(0.0),
        q1: quantile(&values, 0.25),
        median: quantile(&values, 0.5),
        q3: quantile(&values, 0.75),
        max: values.last().copied().unwrap_or(0.0),
        density,
    }
}

fn runs_violin(deliveries: &[&Delivery]) -> Vec<ViolinSeries> {
    let mut by_innings: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for ball in deliveries {
        by_innings
            .entry(ball.innings)
            .or_default()
            .push(f64::from(ball.runs_off_bat));
    }
    by_innings
        .into_iter()
        .map(|(innings, values)| violin(innings, values))
        .collect()
}

/// Every chart series for the team's deliveries
pub fn chart_series(store: &DataStore, team: &TeamFilter) -> Result<ChartSeries> {
    let deliveries = store.require_deliveries(team)?;
    let runs: Vec<f64> = deliveries
        .iter()
        .map(|ball| f64::from(ball.runs_off_bat))
        .collect();

    Ok(ChartSeries {
        team: team.to_string(),
        runs_histogram: runs_histogram(&runs),
        runs_by_innings: runs_by_innings(&deliveries),
        extras_count: store
            .has_extras_type()
            .then(|| extras_count(&deliveries)),
        runs_violin: runs_violin(&deliveries),
    })
}
