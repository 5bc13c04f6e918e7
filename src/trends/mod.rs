//! Trends module - client for the Google Trends explore and widget data API

pub mod client;
pub mod messages;
pub mod query;

pub use client::{TrendsClient, PARTIAL_COLUMN};
pub use query::{KeywordSet, Timeframe};
