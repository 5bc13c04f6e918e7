//! Drawing chart layouts with plotters

use plotters::coord::Shift;
use plotters::prelude::*;

use super::layout::{ChartLayout, LegendPosition, SeriesShape};
use crate::common::errors::{AppError, Result};

fn chart_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Chart(e.to_string())
}

/// Split a gappy series into contiguous runs of present points
fn line_runs(points: &[Option<f64>]) -> Vec<Vec<(usize, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (x, point) in points.iter().enumerate() {
        match point {
            Some(y) => current.push((x, *y)),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Draw a layout onto an already created drawing area
pub fn draw_layout<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &ChartLayout,
) -> Result<()> {
    if layout.series.is_empty() {
        return Err(AppError::Chart("no series to draw".to_string()));
    }
    if layout.x_labels.is_empty() {
        return Err(AppError::Chart("no rows to draw".to_string()));
    }

    root.fill(&WHITE).map_err(chart_err)?;

    let x_max = layout.x_labels.len().saturating_sub(1).max(1);
    let mut chart = ChartBuilder::on(root)
        .caption(&layout.title, ("sans-serif", 28))
        .margin(20)
        .margin_right(40)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0usize..x_max, 0f64..layout.y_max())
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc(layout.x_desc.as_str())
        .y_desc(layout.y_desc.as_str())
        .x_labels(layout.x_labels.len().min(10))
        .y_labels(10)
        .x_label_formatter(&|x: &usize| layout.x_labels.get(*x).cloned().unwrap_or_default())
        .draw()
        .map_err(chart_err)?;

    for (i, series) in layout.series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        match &series.shape {
            SeriesShape::Line { points } => {
                let mut runs = line_runs(points);
                if runs.is_empty() {
                    // keep the legend entry for an all-missing column
                    runs.push(Vec::new());
                }
                for (k, run) in runs.into_iter().enumerate() {
                    let annotation = chart
                        .draw_series(LineSeries::new(run, color.stroke_width(2)))
                        .map_err(chart_err)?;
                    if k == 0 {
                        annotation.label(series.label.as_str()).legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                        });
                    }
                }
            }
            SeriesShape::Band { lower, upper } => {
                let outline: Vec<(usize, f64)> = upper
                    .iter()
                    .copied()
                    .enumerate()
                    .chain(lower.iter().copied().enumerate().rev())
                    .collect();
                chart
                    .draw_series(std::iter::once(Polygon::new(outline, color.mix(0.7).filled())))
                    .map_err(chart_err)?
                    .label(series.label.as_str())
                    .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
            }
        }
    }

    let position = match layout.legend {
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
    };
    chart
        .configure_series_labels()
        .position(position)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_runs_split_on_gaps() {
        let runs = line_runs(&[Some(1.0), Some(2.0), None, None, Some(5.0)]);
        assert_eq!(runs, vec![vec![(0, 1.0), (1, 2.0)], vec![(4, 5.0)]]);
    }

    #[test]
    fn test_line_runs_all_missing() {
        assert!(line_runs(&[None, None]).is_empty());
    }
}
