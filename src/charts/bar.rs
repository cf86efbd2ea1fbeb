use plotters::prelude::*;

use super::canvas::render_png;
use super::{palette, EXTRAS_COUNT};
use crate::analytics::series::ExtrasCount;
use crate::error::Result;

const SIZE: (u32, u32) = (800, 500);

/// Count of deliveries per extras category
pub fn render(team: &str, extras: &[ExtrasCount]) -> Result<Vec<u8>> {
    let slots = extras.len().max(1) as f64;
    let y_max = extras.iter().map(|e| e.count).max().unwrap_or(0).max(1) as f64 * 1.15;
    let title = format!("{team} - Extras Type Distribution");

    render_png(EXTRAS_COUNT, SIZE, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(title, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(48)
            .y_label_area_size(52)
            .build_cartesian_2d(0f64..slots, 0f64..y_max)?;

        let label = |x: &f64| {
            extras
                .get(x.floor() as usize)
                .map(|e| e.kind.clone())
                .unwrap_or_default()
        };
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(extras.len().max(1))
            .x_label_formatter(&label)
            .x_desc("extras_type")
            .y_desc("count")
            .draw()?;

        chart.draw_series(extras.iter().enumerate().map(|(i, e)| {
            let x = i as f64;
            Rectangle::new(
                [(x + 0.1, 0.0), (x + 0.9, e.count as f64)],
                palette::pick(&palette::PASTEL, i).filled(),
            )
        }))?;

        Ok(())
    })
}
