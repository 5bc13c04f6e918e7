//! Error types for the application

use thiserror::Error;

/// Result type alias using our AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for fetch, table and chart operations
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request errors
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Rate limiting errors
    #[error("Rate limit exceeded: {message}, retry after {retry_after_seconds:?} seconds")]
    RateLimit {
        message: String,
        retry_after_seconds: Option<u64>,
    },

    /// Invalid API response
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// Rejected keyword set or timeframe
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Column lookup on a table that lacks it
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Column added twice to the same table
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// Column whose length disagrees with the table index
    #[error("Column {column} has {actual} values, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Chart drawing errors
    #[error("Chart error: {0}")]
    Chart(String),

    /// Filesystem errors while writing charts
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Plot requested without a usable table
    #[error("No data available; fetch first")]
    NoData,

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this error comes from talking to, or interpreting, the upstream source.
    ///
    /// These are the failures a fetch strategy degrades into an empty table.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AppError::HttpRequest(_)
                | AppError::JsonParse(_)
                | AppError::RateLimit { .. }
                | AppError::InvalidResponse(_)
                | AppError::MissingColumn(_)
                | AppError::ColumnLength { .. }
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}
