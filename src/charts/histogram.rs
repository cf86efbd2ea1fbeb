use plotters::prelude::*;

use super::canvas::render_png;
use super::{palette, RUNS_HISTOGRAM};
use crate::analytics::series::RunsHistogram;
use crate::error::{CreaseError, Result};

const SIZE: (u32, u32) = (800, 500);

/// Runs-per-ball histogram with the density curve drawn over it
pub fn render(team: &str, data: &RunsHistogram) -> Result<Vec<u8>> {
    let (Some(first), Some(last)) = (data.bins.first(), data.bins.last()) else {
        return Err(CreaseError::chart(RUNS_HISTOGRAM, "no runs to bin"));
    };

    let tallest_bar = data.bins.iter().map(|bin| bin.count).max().unwrap_or(0) as f64;
    let tallest_curve = data.density.iter().map(|p| p.y).fold(0.0, f64::max);
    let y_max = tallest_bar.max(tallest_curve).max(1.0) * 1.1;
    let title = format!("{team} - Distribution of Runs per Ball");

    render_png(RUNS_HISTOGRAM, SIZE, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(title, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(36)
            .y_label_area_size(52)
            .build_cartesian_2d(first.start..last.end, 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Runs Off Bat")
            .y_desc("Frequency")
            .draw()?;

        chart.draw_series(data.bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.start, 0.0), (bin.end, bin.count as f64)],
                palette::HISTOGRAM.mix(0.6).filled(),
            )
        }))?;

        chart.draw_series(LineSeries::new(
            data.density.iter().map(|p| (p.x, p.y)),
            palette::HISTOGRAM.stroke_width(2),
        ))?;

        Ok(())
    })
}
