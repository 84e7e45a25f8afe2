//! Validation and dispatch of analysis requests.

use crate::error::{DatalensError, Result};
use crate::input::DataTable;
use crate::schema::{ColumnSchema, ColumnType, TableSchema};

use super::aggregate::{group_aggregate, value_counts, Aggregation};
use super::resample::{resample_counts, Granularity};
use super::types::{AnalysisRequest, AnalysisResult, AnalysisType, ChartType};

const MISSING_PARAMETERS: &str = "Missing parameters";
const INVALID_COLUMN: &str = "Invalid column name";
const INVALID_TYPE: &str = "Invalid analysis type";

/// A request that passed validation, with its columns resolved.
#[derive(Debug, Clone)]
pub enum AnalysisPlan<'a> {
    Group {
        column: &'a ColumnSchema,
        group_by: &'a ColumnSchema,
        aggregation: Aggregation,
    },
    ValueCounts {
        column: &'a ColumnSchema,
        group_by: Option<&'a ColumnSchema>,
    },
    Resample {
        column: &'a ColumnSchema,
        granularity: Granularity,
    },
}

impl<'a> AnalysisPlan<'a> {
    /// Validate a request against a schema.
    ///
    /// Checks run in a fixed order: missing parameters, then column
    /// existence, then the analysis type. Resample types are recognized
    /// before the generic parameter check because they never need a
    /// grouping column.
    pub fn resolve(request: &AnalysisRequest, schema: &'a TableSchema) -> Result<Self> {
        let analysis_type = present(&request.analysis_type)
            .ok_or_else(|| DatalensError::invalid(MISSING_PARAMETERS))?;
        let known_type = analysis_type.parse::<AnalysisType>().ok();
        let column = present(&request.column);
        let group_by = present(&request.group_by_col);

        if let Some(kind) = known_type.filter(AnalysisType::is_resample) {
            let column = column.ok_or_else(|| DatalensError::invalid(MISSING_PARAMETERS))?;
            let column = lookup(schema, column)?;
            let granularity = match kind {
                AnalysisType::ResampleQuarter => Granularity::Quarter,
                _ => Granularity::Month,
            };
            return Ok(AnalysisPlan::Resample { column, granularity });
        }

        let group_required = known_type != Some(AnalysisType::ValueCounts);
        let column = match (column, group_by) {
            (Some(column), _) if !group_required || group_by.is_some() => column,
            _ => return Err(DatalensError::invalid(MISSING_PARAMETERS)),
        };

        let column = lookup(schema, column)?;
        let group_by = group_by.map(|name| lookup(schema, name)).transpose()?;

        match (known_type, group_by) {
            (Some(AnalysisType::GroupSum), Some(group_by)) => {
                Self::group(column, group_by, Aggregation::Sum)
            }
            (Some(AnalysisType::GroupAvg), Some(group_by)) => {
                Self::group(column, group_by, Aggregation::Mean)
            }
            (Some(AnalysisType::ValueCounts), group_by) => {
                Ok(AnalysisPlan::ValueCounts { column, group_by })
            }
            _ => Err(DatalensError::invalid(INVALID_TYPE)),
        }
    }

    fn group(
        column: &'a ColumnSchema,
        group_by: &'a ColumnSchema,
        aggregation: Aggregation,
    ) -> Result<Self> {
        if !column.inferred_type.is_numeric() {
            return Err(DatalensError::invalid(format!(
                "Column '{}' is not numeric",
                column.name
            )));
        }
        Ok(AnalysisPlan::Group {
            column,
            group_by,
            aggregation,
        })
    }

    /// Chart title for this plan.
    pub fn title(&self) -> String {
        match self {
            AnalysisPlan::Group { column, group_by, .. }
            | AnalysisPlan::ValueCounts {
                column,
                group_by: Some(group_by),
            } => format!("Analysis of '{}' by '{}'", column.name, group_by.name),
            AnalysisPlan::ValueCounts { column, group_by: None } => {
                format!("Analysis of '{}'", column.name)
            }
            AnalysisPlan::Resample { column, granularity } => {
                format!("{} trend of '{}'", granularity.adjective(), column.name)
            }
        }
    }

    /// Whether every data point is a whole number: counts, and sums of an
    /// integer column.
    pub fn is_integral(&self) -> bool {
        match self {
            AnalysisPlan::Group {
                column,
                aggregation: Aggregation::Sum,
                ..
            } => column.inferred_type == ColumnType::Integer,
            AnalysisPlan::Group { .. } => false,
            AnalysisPlan::ValueCounts { .. } | AnalysisPlan::Resample { .. } => true,
        }
    }

    /// Chart type for this plan.
    pub fn chart_type(&self) -> ChartType {
        match self {
            AnalysisPlan::Group { .. } => ChartType::Bar,
            AnalysisPlan::ValueCounts { .. } => ChartType::Pie,
            AnalysisPlan::Resample { .. } => ChartType::Line,
        }
    }
}

/// Runs validated analyses against a parsed dataset.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine;

impl AnalysisEngine {
    /// Create a new analysis engine.
    pub fn new() -> Self {
        Self
    }

    /// Validate `request` and run the aggregation it names.
    pub fn analyze(
        &self,
        table: &DataTable,
        schema: &TableSchema,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult> {
        let plan = AnalysisPlan::resolve(request, schema).inspect_err(|e| {
            tracing::warn!(error = %e, ?request, "rejected analysis request");
        })?;

        let (labels, data) = match &plan {
            AnalysisPlan::Group {
                column,
                group_by,
                aggregation,
            } => group_aggregate(table, column, group_by, *aggregation),
            AnalysisPlan::ValueCounts { column, .. } => value_counts(table, column),
            AnalysisPlan::Resample { column, granularity } => {
                resample_counts(table, column, *granularity)?
            }
        };

        tracing::debug!(points = labels.len(), title = %plan.title(), "analysis complete");

        Ok(AnalysisResult {
            chart_type: plan.chart_type(),
            labels,
            data,
            title: plan.title(),
            integral: plan.is_integral(),
        })
    }
}

/// A parameter counts as present only when it is non-empty.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn lookup<'a>(schema: &'a TableSchema, name: &str) -> Result<&'a ColumnSchema> {
    schema
        .get_column(name)
        .ok_or_else(|| DatalensError::invalid(INVALID_COLUMN))
}
