//! Aggregations that turn a dataset into chart-ready series.
//!
//! The [`AnalysisEngine`] validates an [`AnalysisRequest`] into an
//! [`AnalysisPlan`] and dispatches it to one of a fixed set of strategies:
//!
//! - `group_sum` / `group_avg`: bar chart of a numeric column per group
//! - `value_counts`: pie chart of value frequencies
//! - `resample_month` / `resample_quarter`: gap-filled line chart of row
//!   counts per calendar bucket

mod aggregate;
mod engine;
mod resample;
mod types;

pub use aggregate::{group_aggregate, value_counts, Aggregation};
pub use engine::{AnalysisEngine, AnalysisPlan};
pub use resample::{resample_counts, Granularity};
pub use types::{AnalysisRequest, AnalysisResult, AnalysisType, ChartType, Label};
