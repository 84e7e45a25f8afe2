//! Main Datalens struct and public API.

use std::path::{Path, PathBuf};

use crate::analysis::{AnalysisEngine, AnalysisRequest, AnalysisResult};
use crate::dataset::{Dataset, DatasetStore};
use crate::error::Result;
use crate::input::{Parser, ParserConfig};
use crate::suggestion::{SuggestionConfig, SuggestionEngine, SuggestionReport};

/// Default directory holding dataset files.
pub const DEFAULT_DATASET_DIR: &str = "datasets";

/// Configuration for a Datalens instance.
#[derive(Debug, Clone)]
pub struct DatalensConfig {
    /// Directory holding one CSV file per dataset.
    pub dataset_dir: PathBuf,
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Suggestion engine configuration.
    pub suggestions: SuggestionConfig,
}

impl Default for DatalensConfig {
    fn default() -> Self {
        Self {
            dataset_dir: PathBuf::from(DEFAULT_DATASET_DIR),
            parser: ParserConfig::default(),
            suggestions: SuggestionConfig::default(),
        }
    }
}

impl DatalensConfig {
    /// Default configuration rooted at `dataset_dir`.
    pub fn with_dataset_dir(dataset_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset_dir: dataset_dir.into(),
            ..Self::default()
        }
    }
}

/// Stateless entry point: every call re-reads the dataset it names.
#[derive(Debug, Clone)]
pub struct Datalens {
    store: DatasetStore,
    suggestions: SuggestionEngine,
    analysis: AnalysisEngine,
}

impl Datalens {
    /// Create an instance serving datasets from `dataset_dir`.
    pub fn new(dataset_dir: impl Into<PathBuf>) -> Self {
        Self::with_config(DatalensConfig::with_dataset_dir(dataset_dir))
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: DatalensConfig) -> Self {
        let store =
            DatasetStore::new(config.dataset_dir).with_parser(Parser::with_config(config.parser));

        Self {
            store,
            suggestions: SuggestionEngine::with_config(config.suggestions),
            analysis: AnalysisEngine::new(),
        }
    }

    /// Directory datasets are read from.
    pub fn dataset_dir(&self) -> &Path {
        self.store.root()
    }

    /// Ids of all available datasets.
    pub fn list_datasets(&self) -> Result<Vec<String>> {
        self.store.list()
    }

    /// Load a dataset with its inferred schema.
    pub fn load(&self, id: &str) -> Result<Dataset> {
        self.store.load(id)
    }

    /// Column names and proposed analyses for a dataset.
    pub fn suggest(&self, id: &str) -> Result<SuggestionReport> {
        let dataset = self.store.load(id)?;
        Ok(self.suggestions.report(&dataset.schema))
    }

    /// Run an analysis on a dataset.
    pub fn analyze(&self, id: &str, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let dataset = self.store.load(id)?;
        self.analysis
            .analyze(&dataset.table, &dataset.schema, request)
    }
}
