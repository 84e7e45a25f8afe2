//! Flat-directory dataset storage: one CSV file per dataset id.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DatalensError, Result};
use crate::inference::StatisticalAnalyzer;
use crate::input::{DataTable, Parser};
use crate::schema::TableSchema;

/// File extension of dataset files.
pub const DATASET_EXTENSION: &str = "csv";

/// A dataset loaded from disk, with its inferred schema.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Dataset id (file stem).
    pub id: String,
    /// Parsed rows.
    pub table: DataTable,
    /// Inferred column types and statistics.
    pub schema: TableSchema,
}

/// Resolves dataset ids to CSV files under a root directory.
///
/// Nothing is cached: every [`DatasetStore::load`] re-reads and re-parses
/// the file.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    root: PathBuf,
    parser: Parser,
    analyzer: StatisticalAnalyzer,
}

impl DatasetStore {
    /// Create a store rooted at `root`. The directory need not exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            parser: Parser::new(),
            analyzer: StatisticalAnalyzer::new(),
        }
    }

    /// Use a custom parser.
    pub fn with_parser(mut self, parser: Parser) -> Self {
        self.parser = parser;
        self
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List dataset ids, sorted. A missing directory holds no datasets.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root).map_err(|e| self.io_error(e))?;

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| self.io_error(e))?.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != DATASET_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem() {
                ids.push(stem.to_string_lossy().into_owned());
            }
        }

        ids.sort();
        Ok(ids)
    }

    /// Path of the file backing `id`.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.{}", id, DATASET_EXTENSION))
    }

    /// Returns true if a dataset file exists for `id`.
    pub fn exists(&self, id: &str) -> bool {
        is_valid_id(id) && self.path_for(id).is_file()
    }

    /// Load and type a dataset.
    pub fn load(&self, id: &str) -> Result<Dataset> {
        if !self.exists(id) {
            return Err(DatalensError::NotFound { id: id.to_string() });
        }

        let table = self.parser.parse_file(self.path_for(id))?;
        let schema = self.analyzer.analyze_table(&table);

        tracing::debug!(
            dataset = id,
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded dataset"
        );

        Ok(Dataset {
            id: id.to_string(),
            table,
            schema,
        })
    }

    fn io_error(&self, source: std::io::Error) -> DatalensError {
        DatalensError::Io {
            path: self.root.clone(),
            source,
        }
    }
}

/// Ids are plain file stems; anything that could escape the root is rejected.
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', '\0'])
}
