//! Request and result types for the analysis engine.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};

use crate::schema::ColumnType;

/// The fixed set of aggregations the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    /// Sum of a numeric column per group.
    GroupSum,
    /// Arithmetic mean of a numeric column per group.
    GroupAvg,
    /// Frequency of each distinct value.
    ValueCounts,
    /// Row count per calendar month.
    ResampleMonth,
    /// Row count per calendar quarter.
    ResampleQuarter,
}

impl AnalysisType {
    /// Wire name of the analysis type.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::GroupSum => "group_sum",
            AnalysisType::GroupAvg => "group_avg",
            AnalysisType::ValueCounts => "value_counts",
            AnalysisType::ResampleMonth => "resample_month",
            AnalysisType::ResampleQuarter => "resample_quarter",
        }
    }

    /// Returns true for the time-bucketing variants.
    pub fn is_resample(&self) -> bool {
        matches!(self, AnalysisType::ResampleMonth | AnalysisType::ResampleQuarter)
    }

    /// Prefix used when deriving suggestion ids.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            AnalysisType::GroupSum => "sum",
            AnalysisType::GroupAvg => "avg",
            AnalysisType::ValueCounts => "count",
            AnalysisType::ResampleMonth => "month",
            AnalysisType::ResampleQuarter => "quarter",
        }
    }
}

impl FromStr for AnalysisType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group_sum" => Ok(AnalysisType::GroupSum),
            "group_avg" => Ok(AnalysisType::GroupAvg),
            "value_counts" => Ok(AnalysisType::ValueCounts),
            "resample_month" => Ok(AnalysisType::ResampleMonth),
            "resample_quarter" => Ok(AnalysisType::ResampleQuarter),
            _ => Err(format!("Unknown analysis type: {}", s)),
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a result should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Pie,
    Line,
}

/// Body of an analyze request.
///
/// Every field is optional on the wire; the engine decides which ones a
/// given analysis type needs. Empty strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Analysis type name, e.g. `group_sum`.
    #[serde(rename = "type", default)]
    pub analysis_type: Option<String>,
    /// Target column.
    #[serde(default)]
    pub column: Option<String>,
    /// Grouping column for the group-style analyses.
    #[serde(default)]
    pub group_by_col: Option<String>,
}

impl AnalysisRequest {
    /// Create a request for a type and target column.
    pub fn new(analysis_type: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            analysis_type: Some(analysis_type.into()),
            column: Some(column.into()),
            group_by_col: None,
        }
    }

    /// Set the grouping column.
    pub fn with_group_by(mut self, group_by_col: impl Into<String>) -> Self {
        self.group_by_col = Some(group_by_col.into());
        self
    }
}

/// A chart label. Keeps the type of the column it came from so numeric
/// group keys serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Label {
    /// Build a label from a raw (non-null) cell of a column of the given type.
    pub fn from_cell(value: &str, column_type: ColumnType) -> Self {
        let trimmed = value.trim();
        match column_type {
            ColumnType::Integer => trimmed
                .parse()
                .map(Label::Integer)
                .unwrap_or_else(|_| Label::Text(value.to_string())),
            ColumnType::Float => trimmed
                .parse()
                .map(Label::Float)
                .unwrap_or_else(|_| Label::Text(value.to_string())),
            _ => Label::Text(value.to_string()),
        }
    }

    /// Total order used to sort group keys: numbers numerically, text
    /// lexicographically, numbers before text.
    pub fn sort_cmp(&self, other: &Label) -> Ordering {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.to_string().cmp(&other.to_string()),
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Label::Integer(v) => Some(*v as f64),
            Label::Float(v) => Some(*v),
            Label::Text(_) => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Integer(v) => write!(f, "{}", v),
            Label::Float(v) => write!(f, "{}", v),
            Label::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

/// Chart-ready output of an analysis.
///
/// `labels` and `data` always have the same length. A group whose target
/// values are all missing averages to NaN, which serializes as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub chart_type: ChartType,
    pub labels: Vec<Label>,
    pub data: Vec<f64>,
    pub title: String,
    /// Whether `data` holds whole numbers (counts, sums of an integer
    /// column). Such series serialize as JSON integers. Not serialized.
    pub integral: bool,
}

impl AnalysisResult {
    /// Number of points in the result.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the aggregation produced no points.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AnalysisResult", 4)?;
        state.serialize_field("chart_type", &self.chart_type)?;
        state.serialize_field("labels", &self.labels)?;
        state.serialize_field(
            "data",
            &Series {
                values: &self.data,
                integral: self.integral,
            },
        )?;
        state.serialize_field("title", &self.title)?;
        state.end()
    }
}

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

struct Series<'a> {
    values: &'a [f64],
    integral: bool,
}

impl Serialize for Series<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len()))?;
        for &value in self.values {
            if self.integral && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
                seq.serialize_element(&(value as i64))?;
            } else {
                seq.serialize_element(&value)?;
            }
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_type_round_trips_wire_names() {
        for ty in [
            AnalysisType::GroupSum,
            AnalysisType::GroupAvg,
            AnalysisType::ValueCounts,
            AnalysisType::ResampleMonth,
            AnalysisType::ResampleQuarter,
        ] {
            assert_eq!(ty.as_str().parse::<AnalysisType>(), Ok(ty));
            assert_eq!(serde_json::to_value(ty).unwrap(), ty.as_str());
        }
        assert!("median".parse::<AnalysisType>().is_err());
    }

    #[test]
    fn test_request_deserializes_missing_and_null_fields() {
        let req: AnalysisRequest =
            serde_json::from_str(r#"{"type": "value_counts", "column": "city", "group_by_col": null}"#)
                .unwrap();
        assert_eq!(req, AnalysisRequest::new("value_counts", "city"));

        let req: AnalysisRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, AnalysisRequest::default());
    }

    #[test]
    fn test_labels_keep_column_type() {
        assert_eq!(Label::from_cell("42", ColumnType::Integer), Label::Integer(42));
        assert_eq!(Label::from_cell(" 2.5", ColumnType::Float), Label::Float(2.5));
        assert_eq!(Label::from_cell("42", ColumnType::String), Label::from("42"));

        let json = serde_json::to_string(&vec![Label::Integer(1), Label::from("x")]).unwrap();
        assert_eq!(json, r#"[1,"x"]"#);
    }

    #[test]
    fn test_integral_series_serialize_as_integers() {
        let mut result = AnalysisResult {
            chart_type: ChartType::Bar,
            labels: vec![Label::from("x"), Label::from("y")],
            data: vec![3.0, -2.0],
            title: "t".to_string(),
            integral: true,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"chart_type":"bar","labels":["x","y"],"data":[3,-2],"title":"t"}"#
        );

        result.integral = false;
        result.data = vec![3.0, f64::NAN];
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["data"], serde_json::json!([3.0, null]));
        assert!(json["data"][0].is_f64());
    }

    #[test]
    fn test_label_ordering() {
        let mut labels = vec![Label::Integer(10), Label::Integer(9), Label::Float(9.5)];
        labels.sort_by(|a, b| a.sort_cmp(b));
        assert_eq!(labels, vec![Label::Integer(9), Label::Float(9.5), Label::Integer(10)]);

        let mut labels = vec![Label::from("b"), Label::from("B"), Label::from("a")];
        labels.sort_by(|a, b| a.sort_cmp(b));
        assert_eq!(labels, vec![Label::from("B"), Label::from("a"), Label::from("b")]);
    }
}
