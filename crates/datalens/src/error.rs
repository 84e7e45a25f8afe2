//! Error types for the datalens library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for datalens operations.
#[derive(Debug, Error)]
pub enum DatalensError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no columns to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// No dataset file exists for the given id.
    #[error("Dataset not found: {id}")]
    NotFound { id: String },

    /// Missing or invalid analysis parameters.
    #[error("{0}")]
    InvalidRequest(String),
}

impl DatalensError {
    /// Shorthand for an [`DatalensError::InvalidRequest`].
    pub fn invalid(message: impl Into<String>) -> Self {
        DatalensError::InvalidRequest(message.into())
    }

    /// Returns true if the error means the dataset does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatalensError::NotFound { .. })
    }

    /// Returns true if the error was caused by the caller's input
    /// (bad parameters or an unreadable CSV) rather than the environment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DatalensError::InvalidRequest(_) | DatalensError::Csv(_) | DatalensError::EmptyData(_)
        )
    }
}

/// Result type alias for datalens operations.
pub type Result<T> = std::result::Result<T, DatalensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = DatalensError::NotFound { id: "sales".into() };
        assert!(err.is_not_found());
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "Dataset not found: sales");

        let err = DatalensError::invalid("Missing parameters");
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Missing parameters");
    }
}
