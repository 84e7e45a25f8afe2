//! Table-level schema definition.

use serde::{Deserialize, Serialize};

use super::column::ColumnSchema;

/// Schema for an entire table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSchema {
    /// Schemas for each column, in file order.
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// Create a table schema with the given columns.
    pub fn with_columns(columns: Vec<ColumnSchema>) -> Self {
        Self { columns }
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The first column, in declared order, whose values all parse as dates.
    ///
    /// At most one temporal column is ever reported even when several
    /// qualify.
    pub fn temporal_column(&self) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.inferred_type.is_temporal())
    }
}
