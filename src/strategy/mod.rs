//! Strategy module for fetching and plotting series data
//!
//! This module provides the two capabilities the application is built from.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐      SeriesTable      ┌──────────────────────┐
//! │    FetchStrategy     │ ────────────────────▶ │     PlotStrategy     │
//! │  TrendsFetchStrategy │   (owned by the app)  │  LineChartStrategy   │
//! └──────────────────────┘                       │  StackedAreaChart... │
//!                                                └──────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`FetchStrategy`]: Produces a fresh table; degrades to an empty table on failure
//! - [`PlotStrategy`]: Builds a [`ChartLayout`](crate::chart::ChartLayout) and writes it
//! - [`TrendsFetchStrategy`]: Joint interest-over-time query for a keyword set
//! - [`LineChartStrategy`], [`StackedAreaChartStrategy`]: The two chart kinds

mod fetch;
mod plot;
mod traits;

pub use fetch::{TrendsFetchStrategy, TRENDS_SOURCE_LABEL};
pub use plot::{LineChartStrategy, StackedAreaChartStrategy};
pub use traits::{BoxedFetchStrategy, BoxedPlotStrategy, FetchStrategy, PlotStrategy};
