//! Fetch strategy backed by the trends service

use async_trait::async_trait;
use tracing::{error, info, instrument};

use super::traits::FetchStrategy;
use crate::common::errors::Result;
use crate::common::table::SeriesTable;
use crate::trends::{KeywordSet, Timeframe, TrendsClient, PARTIAL_COLUMN};

/// Label used in chart titles for trends data
pub const TRENDS_SOURCE_LABEL: &str = "Google Trends";

/// Fetches interest over time for a keyword set in one joint query
#[derive(Debug, Clone)]
pub struct TrendsFetchStrategy {
    client: TrendsClient,
    keywords: KeywordSet,
    timeframe: Timeframe,
}

impl TrendsFetchStrategy {
    pub fn new(client: TrendsClient, keywords: KeywordSet, timeframe: Timeframe) -> Self {
        Self {
            client,
            keywords,
            timeframe,
        }
    }

    /// Query the service and drop the partial flag so terms stay comparable
    async fn try_fetch(&self) -> Result<SeriesTable> {
        let raw = self
            .client
            .interest_over_time(&self.keywords, &self.timeframe)
            .await?;
        raw.drop_column(PARTIAL_COLUMN)
    }
}

#[async_trait]
impl FetchStrategy for TrendsFetchStrategy {
    fn source_label(&self) -> &str {
        TRENDS_SOURCE_LABEL
    }

    #[instrument(skip(self), fields(keywords = self.keywords.len(), timeframe = %self.timeframe))]
    async fn fetch(&self) -> SeriesTable {
        table_or_empty(self.try_fetch().await)
    }
}

/// Degrade a failed fetch to an empty table, logging the cause
fn table_or_empty(result: Result<SeriesTable>) -> SeriesTable {
    match result {
        Ok(table) => {
            info!(
                "Fetched {} rows for {:?}",
                table.row_count(),
                table.column_names()
            );
            table
        }
        Err(e) if e.is_upstream() => {
            error!("Error fetching data: {}", e);
            SeriesTable::empty()
        }
        Err(e) => {
            // fetch never fails, so non-upstream errors are degraded too
            error!(upstream = false, "Unexpected error fetching data: {}", e);
            SeriesTable::empty()
        }
    }
}
