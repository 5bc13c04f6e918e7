//! HTTP client for the trends service

use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use super::messages::*;
use super::query::{KeywordSet, Timeframe};
use crate::common::errors::{AppError, Result};
use crate::common::table::SeriesTable;
use crate::config::types::TrendsConfig;

/// Name of the partial-period flag column in raw interest-over-time tables
pub const PARTIAL_COLUMN: &str = "isPartial";

/// REST client for the trends explore and widget data endpoints
#[derive(Debug, Clone)]
pub struct TrendsClient {
    /// HTTP client with a cookie store
    client: Client,
    /// Base URL, e.g. https://trends.google.com/trends
    base_url: String,
    /// Host language
    hl: String,
    /// Timezone offset in minutes
    tz: i32,
    /// Geographic restriction
    geo: String,
    /// Category filter
    category: u32,
    /// Search property
    property: String,
}

impl TrendsClient {
    /// Create a new client with the default 30 second timeout
    pub fn new(config: &TrendsConfig) -> Result<Self> {
        Self::with_timeout(config, Duration::from_secs(30))
    }

    /// Create a new client with a custom timeout
    pub fn with_timeout(config: &TrendsConfig, timeout: Duration) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            AppError::Configuration(format!("Invalid trends base URL '{}': {}", config.base_url, e))
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            hl: config.hl.clone(),
            tz: config.tz,
            geo: config.geo.clone(),
            category: config.category,
            property: config.property.clone(),
        })
    }

    /// Fetch interest over time for all keywords in one joint query
    ///
    /// The returned table has one column per keyword, in keyword order,
    /// followed by the [`PARTIAL_COLUMN`] flag column (1.0 for partial rows).
    /// An empty timeline yields an empty table without the flag column.
    #[instrument(skip(self))]
    pub async fn interest_over_time(
        &self,
        keywords: &KeywordSet,
        timeframe: &Timeframe,
    ) -> Result<SeriesTable> {
        self.prime_cookies().await;
        let widget = self.explore(keywords, timeframe).await?;
        let data = self.widget_data(&widget).await?;
        timeline_to_table(data.default.timeline_data, keywords)
    }

    /// Visit the explore page so the service hands out its session cookie
    async fn prime_cookies(&self) {
        let region = if self.geo.is_empty() {
            self.hl.rsplit('-').next().unwrap_or("US").to_string()
        } else {
            self.geo.clone()
        };
        let url = format!("{}/explore/", self.base_url);
        debug!("Priming cookies from: {}", url);

        // Errors surface again on the explore request
        if let Err(e) = self.client.get(&url).query(&[("geo", region)]).send().await {
            debug!("Cookie priming failed: {}", e);
        }
    }

    /// Request widget tokens and return the interest-over-time widget
    #[instrument(skip(self))]
    pub async fn explore(&self, keywords: &KeywordSet, timeframe: &Timeframe) -> Result<Widget> {
        let url = format!("{}/api/explore", self.base_url);
        let time = timeframe.to_string();
        let request = ExploreRequest {
            comparison_item: keywords
                .iter()
                .map(|keyword| ComparisonItem {
                    keyword: keyword.to_string(),
                    time: time.clone(),
                    geo: self.geo.clone(),
                })
                .collect(),
            category: self.category,
            property: self.property.clone(),
        };
        let req = serde_json::to_string(&request)?;
        debug!("Requesting explore tokens from: {} req={}", url, req);

        let response = self
            .client
            .post(&url)
            .query(&[("hl", self.hl.clone()), ("tz", self.tz.to_string()), ("req", req)])
            .send()
            .await?;
        let body = Self::success_body(response).await?;

        let explore: ExploreResponse = serde_json::from_str(strip_guard(&body))?;
        explore
            .widgets
            .into_iter()
            .find(|w| w.id == TIMESERIES_WIDGET)
            .ok_or_else(|| AppError::InvalidResponse("No TIMESERIES widget in explore response".to_string()))
    }

    /// Fetch the multiline data behind a TIMESERIES widget
    #[instrument(skip(self, widget))]
    pub async fn widget_data(&self, widget: &Widget) -> Result<MultilineResponse> {
        let token = widget
            .token
            .as_deref()
            .ok_or_else(|| AppError::InvalidResponse("TIMESERIES widget has no token".to_string()))?;
        let request = widget
            .request
            .as_ref()
            .ok_or_else(|| AppError::InvalidResponse("TIMESERIES widget has no request".to_string()))?;

        let url = format!("{}/api/widgetdata/multiline", self.base_url);
        debug!("Fetching interest over time from: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("req", serde_json::to_string(request)?),
                ("token", token.to_string()),
                ("tz", self.tz.to_string()),
            ])
            .send()
            .await?;
        let body = Self::success_body(response).await?;

        Ok(serde_json::from_str(strip_guard(&body))?)
    }

    /// Map non-success statuses to errors, returning the body otherwise
    async fn success_body(response: Response) -> Result<String> {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_seconds = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(AppError::RateLimit {
                message: "Trends service rejected the request".to_string(),
                retry_after_seconds,
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::InvalidResponse(format!(
                "Server returned status {}: {}",
                status, body
            )));
        }
        Ok(response.text().await?)
    }
}

/// Convert timeline points into a table of keyword columns plus the partial flag
pub fn timeline_to_table(points: Vec<TimelinePoint>, keywords: &KeywordSet) -> Result<SeriesTable> {
    if points.is_empty() {
        return Ok(SeriesTable::empty());
    }

    let mut rows = Vec::with_capacity(points.len());
    for point in points {
        let seconds: i64 = point
            .time
            .parse()
            .map_err(|e| AppError::InvalidResponse(format!("Invalid timestamp '{}': {}", point.time, e)))?;
        let timestamp: DateTime<Utc> = DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| AppError::InvalidResponse(format!("Timestamp out of range: {}", seconds)))?;
        if point.value.len() != keywords.len() {
            return Err(AppError::InvalidResponse(format!(
                "Expected {} values at {}, got {}",
                keywords.len(),
                point.time,
                point.value.len()
            )));
        }
        rows.push((timestamp, point));
    }
    rows.sort_by_key(|(timestamp, _)| *timestamp);

    let index = rows.iter().map(|(timestamp, _)| *timestamp).collect();
    let mut table = SeriesTable::new(index);

    for (i, keyword) in keywords.iter().enumerate() {
        let values = rows
            .iter()
            .map(|(_, point)| {
                let has_data = point
                    .has_data
                    .as_ref()
                    .and_then(|flags| flags.get(i).copied())
                    .unwrap_or(true);
                has_data.then(|| point.value[i])
            })
            .collect();
        table = table.with_column(keyword, values)?;
    }

    let partial = rows
        .iter()
        .map(|(_, point)| Some(if point.is_partial.unwrap_or(false) { 1.0 } else { 0.0 }))
        .collect();
    table.with_column(PARTIAL_COLUMN, partial)
}
