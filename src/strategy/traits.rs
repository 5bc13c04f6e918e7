use async_trait::async_trait;
use std::path::PathBuf;

use crate::chart::ChartLayout;
use crate::common::errors::Result;
use crate::common::table::SeriesTable;

/// Source of a time-indexed table of numeric series
///
/// # Implementation Notes
///
/// - `fetch` never fails: upstream failures are logged and degrade to
///   [`SeriesTable::empty`]
/// - Each call produces a fresh table; nothing is cached between calls
/// - `source_label` names the data source and is used in chart titles
#[async_trait]
pub trait FetchStrategy: Send + Sync {
    /// Human readable name of the data source, e.g. "Google Trends"
    fn source_label(&self) -> &str;

    /// Fetch a fresh table from the source
    async fn fetch(&self) -> SeriesTable;
}

/// Renderer for a time-indexed table of numeric series
///
/// Plot strategies hold no data. They read the table and never modify it.
///
/// # Example
///
/// ```ignore
/// struct BarChartStrategy {
///     output: ChartOutput,
/// }
///
/// impl PlotStrategy for BarChartStrategy {
///     fn layout(&self, table: &SeriesTable, subject: &str) -> Result<ChartLayout> {
///         // Build one series per column
///     }
///
///     fn render(&self, table: &SeriesTable, subject: &str) -> Result<PathBuf> {
///         self.output.write(&self.layout(table, subject)?)
///     }
/// }
/// ```
pub trait PlotStrategy: Send + Sync {
    /// Describe the chart for `table` without drawing it
    fn layout(&self, table: &SeriesTable, subject: &str) -> Result<ChartLayout>;

    /// Draw the chart and return where it was written
    fn render(&self, table: &SeriesTable, subject: &str) -> Result<PathBuf>;
}

/// Boxed fetch strategy for dynamic dispatch
pub type BoxedFetchStrategy = Box<dyn FetchStrategy>;

/// Boxed plot strategy for dynamic dispatch
pub type BoxedPlotStrategy = Box<dyn PlotStrategy>;
