//! Plot strategies: line chart and stacked area chart

use std::path::PathBuf;

use super::traits::PlotStrategy;
use crate::chart::{ChartKind, ChartLayout, ChartOutput, ChartSeries, LegendPosition, SeriesShape};
use crate::common::errors::{AppError, Result};
use crate::common::table::SeriesTable;

const X_DESC: &str = "Date";
const Y_DESC: &str = "Relative Search Volume";

/// Date labels for the shared time axis
fn date_labels(table: &SeriesTable) -> Vec<String> {
    table
        .index()
        .iter()
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .collect()
}

fn ensure_drawable(table: &SeriesTable) -> Result<()> {
    if table.column_count() == 0 {
        return Err(AppError::Chart("table has no columns to plot".to_string()));
    }
    if table.row_count() == 0 {
        return Err(AppError::Chart("table has no rows to plot".to_string()));
    }
    Ok(())
}

/// One line per column over a shared time axis
#[derive(Debug, Clone, Default)]
pub struct LineChartStrategy {
    output: ChartOutput,
}

impl LineChartStrategy {
    pub fn new(output: ChartOutput) -> Self {
        Self { output }
    }
}

impl PlotStrategy for LineChartStrategy {
    fn layout(&self, table: &SeriesTable, subject: &str) -> Result<ChartLayout> {
        ensure_drawable(table)?;

        let series = table
            .columns()
            .iter()
            .map(|column| ChartSeries {
                label: column.name.clone(),
                shape: SeriesShape::Line {
                    points: column.values.clone(),
                },
            })
            .collect();

        Ok(ChartLayout {
            kind: ChartKind::Line,
            subject: subject.to_string(),
            title: format!("{} Search Data Over Time", subject),
            x_desc: X_DESC.to_string(),
            y_desc: Y_DESC.to_string(),
            x_labels: date_labels(table),
            series,
            legend: LegendPosition::UpperRight,
        })
    }

    fn render(&self, table: &SeriesTable, subject: &str) -> Result<PathBuf> {
        self.output.write(&self.layout(table, subject)?)
    }
}

/// Cumulative stacked regions, one per column, in column order
#[derive(Debug, Clone, Default)]
pub struct StackedAreaChartStrategy {
    output: ChartOutput,
}

impl StackedAreaChartStrategy {
    pub fn new(output: ChartOutput) -> Self {
        Self { output }
    }
}

impl PlotStrategy for StackedAreaChartStrategy {
    fn layout(&self, table: &SeriesTable, subject: &str) -> Result<ChartLayout> {
        ensure_drawable(table)?;

        // Running baseline; missing cells stack as zero
        let mut baseline = vec![0.0; table.row_count()];
        let mut series = Vec::with_capacity(table.column_count());
        for column in table.columns() {
            let upper: Vec<f64> = baseline
                .iter()
                .zip(&column.values)
                .map(|(base, value)| base + value.unwrap_or(0.0))
                .collect();
            series.push(ChartSeries {
                label: column.name.clone(),
                shape: SeriesShape::Band {
                    lower: baseline,
                    upper: upper.clone(),
                },
            });
            baseline = upper;
        }

        Ok(ChartLayout {
            kind: ChartKind::StackedArea,
            subject: subject.to_string(),
            title: format!("{} Search Data Over Time - Stacked Area Chart", subject),
            x_desc: X_DESC.to_string(),
            y_desc: Y_DESC.to_string(),
            x_labels: date_labels(table),
            series,
            legend: LegendPosition::UpperLeft,
        })
    }

    fn render(&self, table: &SeriesTable, subject: &str) -> Result<PathBuf> {
        self.output.write(&self.layout(table, subject)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_table() -> SeriesTable {
        let index = (0..4)
            .map(|d| Utc.timestamp_opt(1_700_000_000 + d * 86_400, 0).unwrap())
            .collect();
        SeriesTable::new(index)
            .with_column("Football", vec![Some(50.0), Some(60.0), Some(70.0), Some(80.0)])
            .unwrap()
            .with_column("Rugby", vec![Some(10.0), None, Some(12.0), Some(9.0)])
            .unwrap()
            .with_column("Tennis", vec![Some(20.0), Some(25.0), Some(22.0), Some(30.0)])
            .unwrap()
    }

    #[test]
    fn test_line_layout_titles_and_series() {
        let table = sample_table();
        let layout = LineChartStrategy::default()
            .layout(&table, "Google Trends")
            .unwrap();

        assert_eq!(layout.title, "Google Trends Search Data Over Time");
        assert_eq!(layout.x_desc, "Date");
        assert_eq!(layout.y_desc, "Relative Search Volume");
        assert_eq!(layout.x_labels.len(), 4);
        assert_eq!(layout.x_labels[0], "2023-11-14");
        let labels: Vec<_> = layout.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Football", "Rugby", "Tennis"]);
        for series in &layout.series {
            assert_eq!(series.shape.len(), 4);
        }
    }

    #[test]
    fn test_stacked_layout_bands_accumulate() {
        let table = sample_table();
        let layout = StackedAreaChartStrategy::default()
            .layout(&table, "Google Trends")
            .unwrap();

        assert_eq!(
            layout.title,
            "Google Trends Search Data Over Time - Stacked Area Chart"
        );
        assert_eq!(layout.legend, LegendPosition::UpperLeft);

        match &layout.series[1].shape {
            SeriesShape::Band { lower, upper } => {
                assert_eq!(lower, &vec![50.0, 60.0, 70.0, 80.0]);
                // missing Rugby cell stacks as zero
                assert_eq!(upper, &vec![60.0, 60.0, 82.0, 89.0]);
            }
            other => panic!("expected band, got {:?}", other),
        }
        match &layout.series[2].shape {
            SeriesShape::Band { upper, .. } => {
                for (row, top) in upper.iter().enumerate() {
                    assert_eq!(*top, table.row_sum(row));
                }
            }
            other => panic!("expected band, got {:?}", other),
        }
    }

    #[test]
    fn test_layout_does_not_touch_table() {
        let table = sample_table();
        let before = table.clone();
        StackedAreaChartStrategy::default().layout(&table, "x").unwrap();
        LineChartStrategy::default().layout(&table, "x").unwrap();
        assert_eq!(table, before);
    }

    #[test]
    fn test_zero_columns_fails() {
        let index = vec![Utc.timestamp_opt(1_700_000_000, 0).unwrap()];
        let table = SeriesTable::new(index);
        assert!(matches!(
            LineChartStrategy::default().render(&table, "x"),
            Err(AppError::Chart(_))
        ));
        assert!(matches!(
            StackedAreaChartStrategy::default().render(&table, "x"),
            Err(AppError::Chart(_))
        ));
    }
}
