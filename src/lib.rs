//! TrendsChart Library
//!
//! Fetches Google Trends interest-over-time data and renders it as line or
//! stacked area charts, with swappable fetch and plot strategies.

pub mod app;
pub mod chart;
pub mod common;
pub mod config;
pub mod strategy;
pub mod trends;

// Re-export commonly used types
pub use app::{AppState, TrendingSearchApp};
pub use chart::{ChartKind, ChartLayout, ChartOutput, ChartSeries, LegendPosition, SeriesShape};
pub use common::errors::{AppError, Result};
pub use common::table::{Column, SeriesTable};
pub use config::types::AppConfig;
pub use trends::{KeywordSet, Timeframe, TrendsClient};

// Strategy types
pub use strategy::{
    BoxedFetchStrategy, BoxedPlotStrategy, FetchStrategy, LineChartStrategy, PlotStrategy,
    StackedAreaChartStrategy, TrendsFetchStrategy,
};
