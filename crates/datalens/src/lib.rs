//! Datalens: analysis suggestions and chart-ready aggregations for CSV datasets.
//!
//! Datasets are plain CSV files in a directory, one file per dataset id.
//! Each request re-reads its file, infers a typed schema, and then either
//! proposes analyses for it or runs one.
//!
//! # Example
//!
//! ```no_run
//! use datalens::{AnalysisRequest, Datalens};
//!
//! let datalens = Datalens::new("datasets");
//! let report = datalens.suggest("sales").unwrap();
//! println!("Suggestions: {}", report.suggestions.len());
//!
//! let request = AnalysisRequest::new("group_sum", "amount").with_group_by("region");
//! let result = datalens.analyze("sales", &request).unwrap();
//! println!("{}: {:?}", result.title, result.data);
//! ```

pub mod analysis;
pub mod dataset;
pub mod error;
pub mod inference;
pub mod input;
pub mod schema;
pub mod suggestion;

mod datalens;

pub use crate::datalens::{Datalens, DatalensConfig, DEFAULT_DATASET_DIR};
pub use analysis::{AnalysisRequest, AnalysisResult, AnalysisType, ChartType, Label};
pub use dataset::{Dataset, DatasetStore};
pub use error::{DatalensError, Result};
pub use input::{DataTable, Parser, ParserConfig};
pub use schema::{ColumnSchema, ColumnType, TableSchema};
pub use suggestion::{Suggestion, SuggestionConfig, SuggestionEngine, SuggestionReport};
