//! Configuration types

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Trends service connection settings
    #[serde(default)]
    pub trends: TrendsConfig,
    /// What to query
    #[serde(default)]
    pub query: QueryConfig,
    /// Where and how charts are written
    #[serde(default)]
    pub output: OutputConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Trends service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsConfig {
    /// Base URL of the trends service
    #[serde(default = "default_trends_url")]
    pub base_url: String,
    /// Host language sent with every request
    #[serde(default = "default_host_language")]
    pub hl: String,
    /// Timezone offset in minutes
    #[serde(default = "default_tz")]
    pub tz: i32,
    /// Geographic restriction; empty means worldwide
    #[serde(default)]
    pub geo: String,
    /// Category filter; 0 means all categories
    #[serde(default)]
    pub category: u32,
    /// Search property (empty for web search, or "images", "news", "youtube", "froogle")
    #[serde(default)]
    pub property: String,
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            base_url: default_trends_url(),
            hl: default_host_language(),
            tz: default_tz(),
            geo: String::new(),
            category: 0,
            property: String::new(),
        }
    }
}

fn default_trends_url() -> String {
    "https://trends.google.com/trends".to_string()
}

fn default_host_language() -> String {
    "en-US".to_string()
}

fn default_tz() -> i32 {
    360
}

/// Keyword query configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Keywords compared in one joint query
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    /// Time window, e.g. "today 3-m"
    #[serde(default = "default_timeframe")]
    pub timeframe: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            timeframe: default_timeframe(),
        }
    }
}

fn default_keywords() -> Vec<String> {
    vec![
        "Football".to_string(),
        "Rugby".to_string(),
        "Tennis".to_string(),
    ]
}

fn default_timeframe() -> String {
    "today 3-m".to_string()
}

/// Image encoding for rendered charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Chart output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory charts are written to
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Image format
    #[serde(default)]
    pub format: ImageFormat,
    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            format: ImageFormat::default(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_output_dir() -> String {
    "charts".to_string()
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    600
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
