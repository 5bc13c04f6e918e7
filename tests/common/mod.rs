//! Common test utilities and fixtures

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use trends_chart::config::TrendsConfig;
use trends_chart::{FetchStrategy, SeriesTable, TrendsClient};

/// Create a sample table with Football, Rugby and Tennis columns
pub fn sample_table(rows: i64) -> SeriesTable {
    let index = (0..rows)
        .map(|d| Utc.timestamp_opt(1_704_067_200 + d * 604_800, 0).unwrap())
        .collect();
    let column = |offset: f64| (0..rows).map(|r| Some(offset + r as f64)).collect();
    SeriesTable::new(index)
        .with_column("Football", column(50.0))
        .unwrap()
        .with_column("Rugby", column(10.0))
        .unwrap()
        .with_column("Tennis", column(20.0))
        .unwrap()
}

/// Client pointed at a mock server
pub fn client_for(base_url: &str) -> TrendsClient {
    let config = TrendsConfig {
        base_url: base_url.to_string(),
        ..TrendsConfig::default()
    };
    TrendsClient::new(&config).expect("Failed to create trends client")
}

/// Fetch strategy returning a canned table and counting calls
pub struct CountingFetch {
    label: &'static str,
    table: SeriesTable,
    calls: Arc<AtomicUsize>,
}

impl CountingFetch {
    pub fn new(table: SeriesTable) -> (Self, Arc<AtomicUsize>) {
        Self::with_label("Test Source", table)
    }

    pub fn with_label(label: &'static str, table: SeriesTable) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                label,
                table,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl FetchStrategy for CountingFetch {
    fn source_label(&self) -> &str {
        self.label
    }

    async fn fetch(&self) -> SeriesTable {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.table.clone()
    }
}

/// Sample upstream responses, including the anti-hijacking guards
pub mod api_responses {
    /// Explore response with a TIMESERIES widget and an unrelated widget
    pub const EXPLORE: &str = r#")]}'
{
    "widgets": [
        {
            "id": "TIMESERIES",
            "title": "Interest over time",
            "token": "tok123",
            "request": {
                "time": "2024-01-01 2024-01-22",
                "resolution": "WEEK",
                "comparisonItem": [
                    {"geo": {}, "complexKeywordsRestriction": {"keyword": [{"type": "BROAD", "value": "Football"}]}},
                    {"geo": {}, "complexKeywordsRestriction": {"keyword": [{"type": "BROAD", "value": "Rugby"}]}},
                    {"geo": {}, "complexKeywordsRestriction": {"keyword": [{"type": "BROAD", "value": "Tennis"}]}}
                ],
                "requestOptions": {"property": "", "backend": "IZG", "category": 0}
            }
        },
        {
            "id": "GEO_MAP",
            "token": "geo456",
            "request": {}
        }
    ]
}"#;

    /// Explore response lacking a TIMESERIES widget
    pub const EXPLORE_NO_TIMESERIES: &str = r#")]}'
{"widgets": [{"id": "GEO_MAP", "token": "geo456", "request": {}}]}"#;

    /// Multiline data for Football, Rugby, Tennis; the last week is partial
    pub const MULTILINE: &str = r#")]}',
{
    "default": {
        "timelineData": [
            {"time": "1704067200", "formattedTime": "Dec 31, 2023 - Jan 6, 2024", "value": [80, 12, 30], "hasData": [true, true, true], "formattedValue": ["80", "12", "30"]},
            {"time": "1704672000", "formattedTime": "Jan 7 - 13, 2024", "value": [100, 15, 28], "hasData": [true, true, true], "formattedValue": ["100", "15", "28"]},
            {"time": "1705276800", "formattedTime": "Jan 14 - 20, 2024", "value": [90, 0, 35], "hasData": [true, false, true], "formattedValue": ["90", "0", "35"], "isPartial": true}
        ],
        "averages": []
    }
}"#;

    /// Multiline data with no rows
    pub const MULTILINE_EMPTY: &str = r#")]}',
{"default": {"timelineData": [], "averages": []}}"#;
}
