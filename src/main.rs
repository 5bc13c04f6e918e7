//! TrendsChart - Main Entry Point
//!
//! Fetches interest over time for the configured keywords, plots it as a
//! line chart, then re-plots the same data as a stacked area chart.

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use tracing::info;

use trends_chart::common::logging::init_logging;
use trends_chart::config::load_config;
use trends_chart::{
    ChartOutput, KeywordSet, LineChartStrategy, StackedAreaChartStrategy, Timeframe,
    TrendingSearchApp, TrendsClient, TrendsFetchStrategy,
};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let config = load_config(Some(&args.config)).context("loading configuration")?;

    let level = args
        .log_level
        .as_deref()
        .unwrap_or(&config.settings.log_level);
    init_logging(level)?;

    info!("Starting TrendsChart application");
    info!("Configuration file: {}", args.config);

    let keywords = KeywordSet::new(config.query.keywords.iter().cloned())?;
    let timeframe: Timeframe = config.query.timeframe.parse()?;
    let client = TrendsClient::with_timeout(
        &config.trends,
        Duration::from_secs(config.settings.request_timeout_seconds),
    )?;
    let output = ChartOutput::from_config(&config.output);

    let mut app = TrendingSearchApp::new(
        Box::new(TrendsFetchStrategy::new(client, keywords, timeframe)),
        Box::new(LineChartStrategy::new(output.clone())),
    );

    let line_path = app.run().await?;
    info!("Line chart: {}", line_path.display());

    app.set_plot_strategy(Box::new(StackedAreaChartStrategy::new(output)));
    let stacked_path = app.plot()?;
    info!("Stacked area chart: {}", stacked_path.display());

    Ok(())
}
