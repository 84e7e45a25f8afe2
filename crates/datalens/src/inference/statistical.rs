//! Column type inference and per-column statistics.

use std::collections::HashSet;

use crate::input::DataTable;
use crate::schema::{ColumnSchema, ColumnStatistics, ColumnType, TableSchema};

use super::temporal::{has_time_component, parse_timestamp};

/// Infers a typed schema from raw string cells.
///
/// A column only gets a type when *every* non-null value agrees with it:
/// one stray word in a numeric column makes it text, one unparseable cell
/// in a date column makes it text.
#[derive(Debug, Clone, Default)]
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Analyze every column of a table.
    pub fn analyze_table(&self, table: &DataTable) -> TableSchema {
        let columns = table
            .headers
            .iter()
            .enumerate()
            .map(|(index, name)| self.analyze_column(table, index, name))
            .collect();

        TableSchema::with_columns(columns)
    }

    /// Analyze a single column.
    pub fn analyze_column(&self, table: &DataTable, index: usize, name: &str) -> ColumnSchema {
        let values: Vec<&str> = table.column_values(index).collect();
        let non_null: Vec<&str> = values
            .iter()
            .copied()
            .filter(|v| !DataTable::is_null_value(v))
            .collect();

        let unique_count = non_null.iter().collect::<HashSet<_>>().len();
        let statistics = ColumnStatistics {
            count: values.len(),
            null_count: values.len() - non_null.len(),
            unique_count,
        };

        let inferred_type = self.infer_type(&non_null);
        tracing::debug!(column = name, %inferred_type, unique_count, "inferred column type");

        ColumnSchema::new(name, index)
            .with_type(inferred_type)
            .with_statistics(statistics)
    }

    /// Infer the data type from non-null values.
    fn infer_type(&self, values: &[&str]) -> ColumnType {
        if values.is_empty() {
            return ColumnType::Unknown;
        }

        if values.iter().all(|v| v.trim().parse::<i64>().is_ok()) {
            return ColumnType::Integer;
        }

        if values.iter().all(|v| v.trim().parse::<f64>().is_ok()) {
            return ColumnType::Float;
        }

        if values.iter().all(|v| parse_timestamp(v).is_some()) {
            if values.iter().any(|v| has_time_component(v)) {
                return ColumnType::DateTime;
            }
            return ColumnType::Date;
        }

        ColumnType::String
    }
}
