use plotters::prelude::*;

use super::canvas::render_png;
use super::{palette, RUNS_VIOLIN};
use crate::analytics::series::ViolinSeries;
use crate::error::{CreaseError, Result};

const SIZE: (u32, u32) = (800, 500);
/// Widest violin as a fraction of its slot
const HALF_WIDTH: f64 = 0.4;

fn y_range(violins: &[ViolinSeries]) -> (f64, f64) {
    let (lo, hi) = violins
        .iter()
        .flat_map(|v| {
            let tails = v.density.first().zip(v.density.last()).map(|(a, b)| (a.x, b.x));
            let (lo, hi) = tails.unwrap_or((v.min, v.max));
            [lo.min(v.min), hi.max(v.max)]
        })
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });
    if hi - lo < 1.0 {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

/// Mirrored density outline around the slot centre
fn outline(violin: &ViolinSeries, center: f64) -> Vec<(f64, f64)> {
    let peak = violin.density.iter().map(|p| p.y).fold(0.0, f64::max);
    if peak <= 0.0 {
        return Vec::new();
    }
    let right = violin
        .density
        .iter()
        .map(|p| (center + HALF_WIDTH * p.y / peak, p.x));
    let left = violin
        .density
        .iter()
        .rev()
        .map(|p| (center - HALF_WIDTH * p.y / peak, p.x));
    right.chain(left).collect()
}

/// Runs-per-ball distribution for each innings, side by side
pub fn render(team: &str, violins: &[ViolinSeries]) -> Result<Vec<u8>> {
    if violins.is_empty() {
        return Err(CreaseError::chart(RUNS_VIOLIN, "no innings to plot"));
    }
    let (y_lo, y_hi) = y_range(violins);
    let title = format!("{team} - Runs Distribution by Inning (Violin)");

    render_png(RUNS_VIOLIN, SIZE, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(title, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(36)
            .y_label_area_size(52)
            .build_cartesian_2d(0f64..violins.len() as f64, y_lo..y_hi)?;

        let label = |x: &f64| {
            violins
                .get(x.floor() as usize)
                .map(|v| v.innings.to_string())
                .unwrap_or_default()
        };
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(violins.len())
            .x_label_formatter(&label)
            .x_desc("innings")
            .y_desc("runs_off_bat")
            .draw()?;

        for (i, violin) in violins.iter().enumerate() {
            let center = i as f64 + 0.5;
            let color = palette::pick(&palette::MUTED, i);
            let shape = outline(violin, center);

            if shape.is_empty() {
                // every ball in the innings scored the same
                chart.draw_series(std::iter::once(PathElement::new(
                    vec![
                        (center - HALF_WIDTH, violin.median),
                        (center + HALF_WIDTH, violin.median),
                    ],
                    color.stroke_width(3),
                )))?;
                continue;
            }

            chart.draw_series(std::iter::once(Polygon::new(shape, color.mix(0.8).filled())))?;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(center - 0.03, violin.q1), (center + 0.03, violin.q3)],
                BLACK.filled(),
            )))?;
            chart.draw_series(std::iter::once(Circle::new(
                (center, violin.median),
                4,
                WHITE.filled(),
            )))?;
        }

        Ok(())
    })
}
