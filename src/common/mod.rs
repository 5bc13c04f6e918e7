//! Common types and utilities shared across modules

pub mod errors;
pub mod logging;
pub mod table;

pub use errors::{AppError, Result};
pub use table::{Column, SeriesTable};
