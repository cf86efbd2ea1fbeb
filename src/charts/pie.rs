use plotters::prelude::*;
use std::f64::consts::PI;

use super::canvas::render_png;
use super::{palette, RUNS_PIECHART};
use crate::analytics::series::InningsRuns;
use crate::error::{CreaseError, Result};

const SIZE: (u32, u32) = (700, 700);
/// First slice starts here, measured counter-clockwise from three o'clock
const START_ANGLE_DEG: f64 = 140.0;
/// Arc resolution, in points per full turn
const ARC_STEPS: f64 = 180.0;

fn point_at(center: (i32, i32), radius: f64, angle: f64) -> (i32, i32) {
    (
        center.0 + (radius * angle.cos()).round() as i32,
        // screen y grows downwards
        center.1 - (radius * angle.sin()).round() as i32,
    )
}

fn wedge(center: (i32, i32), radius: f64, from: f64, to: f64) -> Vec<(i32, i32)> {
    let steps = (((to - from) / (2.0 * PI)) * ARC_STEPS).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let angle = from + (to - from) * i as f64 / steps as f64;
        points.push(point_at(center, radius, angle));
    }
    points
}

/// Total runs by innings as a pie, one labelled slice per innings
pub fn render(team: &str, innings: &[InningsRuns]) -> Result<Vec<u8>> {
    let total: u64 = innings.iter().map(|i| i.runs).sum();
    if total == 0 {
        return Err(CreaseError::chart(RUNS_PIECHART, "no runs to divide"));
    }
    let title = format!("{team} - Total Runs by Innings (Pie Chart)");

    render_png(RUNS_PIECHART, SIZE, |root| {
        let area = root.titled(&title, ("sans-serif", 22))?;
        let (width, height) = area.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.38;

        let mut angle = START_ANGLE_DEG.to_radians();
        for (i, slice) in innings.iter().enumerate() {
            let sweep = 2.0 * PI * slice.runs as f64 / total as f64;
            let color = palette::pick(&palette::SET2, i);

            area.draw(&Polygon::new(
                wedge(center, radius, angle, angle + sweep),
                color.filled(),
            ))?;

            let middle = angle + sweep / 2.0;
            let label_style = ("sans-serif", 16).into_font().color(&BLACK);
            area.draw(&Text::new(
                format!("Innings {}", slice.innings),
                point_at(center, radius * 1.12, middle),
                label_style.clone(),
            ))?;
            area.draw(&Text::new(
                format!("{:.1}%", slice.share),
                point_at(center, radius * 0.6, middle),
                label_style,
            ))?;

            angle += sweep;
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wedge_starts_at_center_and_spans_arc() {
        let points = wedge((100, 100), 50.0, 0.0, PI / 2.0);
        assert_eq!(points[0], (100, 100));
        assert_eq!(points[1], (150, 100));
        assert_eq!(*points.last().unwrap(), (100, 50));
    }

    #[test]
    fn test_zero_runs_cannot_be_drawn() {
        let innings = vec![InningsRuns {
            innings: 1,
            runs: 0,
            share: 0.0,
        }];
        assert!(render("A", &innings).is_err());
    }
}
