//! Application state for the web server.

use std::sync::Arc;

use datalens::{Datalens, DatalensConfig};

use super::error::ApiError;

/// Shared application state.
///
/// Holds nothing mutable: every request re-reads its dataset from disk.
#[derive(Clone)]
pub struct AppState {
    /// The analysis service, configured with the dataset directory.
    pub datalens: Arc<Datalens>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: DatalensConfig) -> Self {
        Self {
            datalens: Arc::new(Datalens::with_config(config)),
        }
    }

    /// Run a dataset operation on the blocking pool.
    ///
    /// File reads and aggregation are synchronous, so they stay off the
    /// async worker threads.
    pub async fn run<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Datalens) -> datalens::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let datalens = Arc::clone(&self.datalens);
        tokio::task::spawn_blocking(move || f(datalens.as_ref()))
            .await
            .map_err(|e| ApiError::Internal(format!("Worker task failed: {}", e)))?
            .map_err(ApiError::from)
    }
}
