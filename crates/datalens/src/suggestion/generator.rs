//! Rule-based suggestion generation from an inferred schema.
//!
//! The engine looks only at column types and cardinality:
//!
//! - the first column whose values all parse as dates gets the two
//!   resampling suggestions;
//! - every other numeric column gets a sum and an average;
//! - every other low-cardinality text column gets a value count.

use crate::analysis::AnalysisType;
use crate::schema::TableSchema;

use super::{Suggestion, SuggestionReport};

/// Default exclusive upper bound on distinct values for a categorical column.
pub const DEFAULT_CATEGORICAL_THRESHOLD: usize = 20;

/// Suggestion engine configuration.
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    /// A text column is categorical when it has strictly fewer distinct
    /// non-null values than this.
    pub categorical_threshold: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            categorical_threshold: DEFAULT_CATEGORICAL_THRESHOLD,
        }
    }
}

/// Generates analysis suggestions from a schema.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: SuggestionConfig) -> Self {
        Self { config }
    }

    /// Build the full report for a dataset.
    pub fn report(&self, schema: &TableSchema) -> SuggestionReport {
        SuggestionReport {
            columns: schema.column_names(),
            suggestions: self.generate(schema),
        }
    }

    /// Generate suggestions for every column of a schema.
    pub fn generate(&self, schema: &TableSchema) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        let temporal = schema.temporal_column();
        if let Some(column) = temporal {
            suggestions.push(Suggestion::new(AnalysisType::ResampleMonth, &column.name));
            suggestions.push(Suggestion::new(AnalysisType::ResampleQuarter, &column.name));
        }

        for column in &schema.columns {
            if temporal.is_some_and(|t| t.position == column.position) {
                continue;
            }

            if column.inferred_type.is_numeric() {
                suggestions.push(Suggestion::new(AnalysisType::GroupSum, &column.name));
                suggestions.push(Suggestion::new(AnalysisType::GroupAvg, &column.name));
            } else if column.is_categorical(self.config.categorical_threshold) {
                suggestions.push(Suggestion::new(AnalysisType::ValueCounts, &column.name));
            }
        }

        tracing::debug!(count = suggestions.len(), "generated suggestions");
        suggestions
    }
}
