//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::{AppError, Result};

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with APP_, sections split by `__`)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    // APP__QUERY__KEYWORDS="Football,Rugby" style overrides
    builder = builder.add_source(
        Environment::with_prefix("APP")
            .prefix_separator("__")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("query.keywords")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| AppError::Configuration(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| AppError::Configuration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::ImageFormat;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = load_config(Some("does-not-exist.toml")).unwrap();
        assert_eq!(config.query.timeframe, "today 3-m");
        assert_eq!(config.query.keywords.len(), 3);
        assert_eq!(config.trends.hl, "en-US");
        assert_eq!(config.output.format, ImageFormat::Png);
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "trends_chart_config_{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[query]
keywords = ["Cricket", "Golf"]
timeframe = "today 12-m"

[output]
format = "svg"
directory = "out"
"#
        )
        .unwrap();

        let config = load_config(path.to_str()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.query.keywords, vec!["Cricket", "Golf"]);
        assert_eq!(config.query.timeframe, "today 12-m");
        assert_eq!(config.output.format, ImageFormat::Svg);
        assert_eq!(config.output.directory, "out");
        assert_eq!(config.output.width, 1000);
    }
}
