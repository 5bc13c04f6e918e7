//! Fetch-then-plot orchestration

use std::path::PathBuf;
use tracing::{info, info_span, Instrument, Span};

use crate::common::errors::{AppError, Result};
use crate::common::table::SeriesTable;
use crate::strategy::{BoxedFetchStrategy, BoxedPlotStrategy, FetchStrategy};

/// Whether the application holds a fetched table yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Nothing fetched yet
    Empty,
    /// A table is stored (possibly an empty one)
    Ready,
}

/// Holds one fetch strategy, one plot strategy and the last fetched table
pub struct TrendingSearchApp {
    fetch_strategy: BoxedFetchStrategy,
    plot_strategy: BoxedPlotStrategy,
    data: Option<SeriesTable>,
    span: Span,
}

impl TrendingSearchApp {
    pub fn new(fetch_strategy: BoxedFetchStrategy, plot_strategy: BoxedPlotStrategy) -> Self {
        let span = span_for(fetch_strategy.as_ref());
        Self {
            fetch_strategy,
            plot_strategy,
            data: None,
            span,
        }
    }

    /// Fetch a fresh table, store it and plot it
    pub async fn run(&mut self) -> Result<PathBuf> {
        self.span.in_scope(|| info!("Fetching data from {}", self.fetch_strategy.source_label()));
        let table = self
            .fetch_strategy
            .fetch()
            .instrument(self.span.clone())
            .await;
        self.data = Some(table);
        self.plot()
    }

    /// Render the stored table with the current plot strategy
    ///
    /// Fails with [`AppError::NoData`] before the first fetch or when the
    /// stored table is empty.
    pub fn plot(&self) -> Result<PathBuf> {
        let _enter = self.span.enter();
        let table = match &self.data {
            Some(table) if !table.is_empty() => table,
            _ => return Err(AppError::NoData),
        };

        let path = self
            .plot_strategy
            .render(table, self.fetch_strategy.source_label())?;
        info!("Plotted {} series to {}", table.column_count(), path.display());
        Ok(path)
    }

    /// Swap the plot strategy; the next `plot` uses it without re-fetching
    pub fn set_plot_strategy(&mut self, plot_strategy: BoxedPlotStrategy) {
        self.plot_strategy = plot_strategy;
    }

    /// Swap the fetch strategy; the stored table is kept until the next `run`
    pub fn set_fetch_strategy(&mut self, fetch_strategy: BoxedFetchStrategy) {
        self.span = span_for(fetch_strategy.as_ref());
        self.fetch_strategy = fetch_strategy;
    }

    pub fn state(&self) -> AppState {
        if self.data.is_some() {
            AppState::Ready
        } else {
            AppState::Empty
        }
    }

    /// The last fetched table, if any
    pub fn data(&self) -> Option<&SeriesTable> {
        self.data.as_ref()
    }
}

fn span_for(fetch_strategy: &dyn FetchStrategy) -> Span {
    info_span!("trending_search_app", source = fetch_strategy.source_label())
}
