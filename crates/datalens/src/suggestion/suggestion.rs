//! Suggestion types for proposed analyses.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisType;

/// A proposed analysis of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Deterministic identifier, `{prefix}_{column}`.
    pub id: String,

    /// Human-readable description.
    pub text: String,

    /// Analysis to run when the suggestion is picked.
    #[serde(rename = "type")]
    pub analysis_type: AnalysisType,

    /// Target column.
    pub column: String,
}

impl Suggestion {
    /// Create a suggestion for running `analysis_type` on `column`.
    pub fn new(analysis_type: AnalysisType, column: impl Into<String>) -> Self {
        let column = column.into();
        let text = match analysis_type {
            AnalysisType::GroupSum => format!("Sum of '{}' per group", column),
            AnalysisType::GroupAvg => format!("Average of '{}' per group", column),
            AnalysisType::ValueCounts => format!("Count rows per '{}' value", column),
            AnalysisType::ResampleMonth => format!("Count rows per month of '{}'", column),
            AnalysisType::ResampleQuarter => format!("Count rows per quarter of '{}'", column),
        };

        Self {
            id: format!("{}_{}", analysis_type.id_prefix(), column),
            text,
            analysis_type,
            column,
        }
    }

    /// Whether the caller must pick a grouping column before running this.
    pub fn requires_group_by(&self) -> bool {
        matches!(
            self.analysis_type,
            AnalysisType::GroupSum | AnalysisType::GroupAvg
        )
    }
}

/// Columns of a dataset together with the analyses proposed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionReport {
    /// All column names, in file order.
    pub columns: Vec<String>,
    /// Proposed analyses.
    pub suggestions: Vec<Suggestion>,
}
