//! Time-indexed table of numeric series
//!
//! A [`SeriesTable`] is the unit exchanged between fetch and plot strategies:
//! rows are timestamps in chronological order, columns are categories
//! (search keywords) and cells are optional relative-volume values.

use chrono::{DateTime, Utc};

use super::errors::{AppError, Result};

/// A single named column of a [`SeriesTable`]
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Category name (e.g. the search keyword)
    pub name: String,
    /// One cell per row; `None` when the source had no value
    pub values: Vec<Option<f64>>,
}

/// Time-indexed table of numeric series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesTable {
    index: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
}

impl SeriesTable {
    /// Create a table with the given row index and no columns
    pub fn new(index: Vec<DateTime<Utc>>) -> Self {
        Self {
            index,
            columns: Vec::new(),
        }
    }

    /// Table with zero rows and zero columns
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a column; its length must match the row count
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<Option<f64>>) -> Result<Self> {
        let name = name.into();
        if self.columns.iter().any(|c| c.name == name) {
            return Err(AppError::DuplicateColumn(name));
        }
        if values.len() != self.index.len() {
            return Err(AppError::ColumnLength {
                column: name,
                expected: self.index.len(),
                actual: values.len(),
            });
        }
        self.columns.push(Column { name, values });
        Ok(self)
    }

    /// Return a copy of this table without the named column
    pub fn drop_column(mut self, name: &str) -> Result<Self> {
        let position = self
            .columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| AppError::MissingColumn(name.to_string()))?;
        self.columns.remove(position);
        Ok(self)
    }

    /// Row timestamps
    pub fn index(&self) -> &[DateTime<Utc>] {
        &self.index
    }

    /// All columns in insertion order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.index.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.index.is_empty() || self.columns.is_empty()
    }

    /// Sum of the present cells in a row
    pub fn row_sum(&self, row: usize) -> f64 {
        self.columns
            .iter()
            .filter_map(|c| c.values.get(row).copied().flatten())
            .sum()
    }
}
