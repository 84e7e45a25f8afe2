//! Column schema definition and statistics.

use serde::{Deserialize, Serialize};

use super::types::ColumnType;

/// Statistics computed for a column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    /// Total number of values (including nulls).
    pub count: usize,
    /// Number of null/missing values.
    pub null_count: usize,
    /// Number of unique non-null values.
    pub unique_count: usize,
}

/// Schema for a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name.
    pub name: String,
    /// Zero-based position in the table.
    pub position: usize,
    /// Inferred data type.
    pub inferred_type: ColumnType,
    /// Computed statistics.
    pub statistics: ColumnStatistics,
}

impl ColumnSchema {
    /// Create a new column schema with basic information.
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
            inferred_type: ColumnType::Unknown,
            statistics: ColumnStatistics::default(),
        }
    }

    /// Set the inferred type.
    pub fn with_type(mut self, inferred_type: ColumnType) -> Self {
        self.inferred_type = inferred_type;
        self
    }

    /// Set the statistics.
    pub fn with_statistics(mut self, statistics: ColumnStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    /// Whether the column holds few enough distinct text values to be
    /// treated as a category. `threshold` is exclusive.
    pub fn is_categorical(&self, threshold: usize) -> bool {
        !self.inferred_type.is_numeric()
            && self.inferred_type != ColumnType::Unknown
            && self.statistics.unique_count < threshold
    }

    /// Get the null percentage.
    pub fn null_percentage(&self) -> f64 {
        if self.statistics.count == 0 {
            0.0
        } else {
            (self.statistics.null_count as f64 / self.statistics.count as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(unique_count: usize) -> ColumnStatistics {
        ColumnStatistics {
            count: 40,
            null_count: 10,
            unique_count,
        }
    }

    #[test]
    fn test_categorical_threshold_is_exclusive() {
        let col = ColumnSchema::new("region", 0)
            .with_type(ColumnType::String)
            .with_statistics(stats(19));
        assert!(col.is_categorical(20));

        let col = col.with_statistics(stats(20));
        assert!(!col.is_categorical(20));
    }

    #[test]
    fn test_numeric_and_unknown_are_not_categorical() {
        let col = ColumnSchema::new("amount", 0)
            .with_type(ColumnType::Integer)
            .with_statistics(stats(3));
        assert!(!col.is_categorical(20));

        let col = ColumnSchema::new("blank", 1);
        assert!(!col.is_categorical(20));
    }

    #[test]
    fn test_null_percentage() {
        let col = ColumnSchema::new("x", 0).with_statistics(stats(2));
        assert_eq!(col.null_percentage(), 25.0);
        assert_eq!(ColumnSchema::new("y", 0).null_percentage(), 0.0);
    }
}
