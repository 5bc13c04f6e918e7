//! Chart module - layouts, plotters drawing and file output

pub mod draw;
pub mod layout;
pub mod output;

pub use draw::draw_layout;
pub use layout::{ChartKind, ChartLayout, ChartSeries, LegendPosition, SeriesShape};
pub use output::ChartOutput;
