//! Dataset listing and suggestion handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use datalens::SuggestionReport;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// List dataset ids, sorted. An absent dataset directory yields `[]`.
pub async fn list_datasets(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let ids = state.run(|datalens| datalens.list_datasets()).await?;
    Ok(Json(ids))
}

/// Columns of a dataset and the analyses proposed for it.
pub async fn get_suggestions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuggestionReport>, ApiError> {
    let report = state.run(move |datalens| datalens.suggest(&id)).await?;
    Ok(Json(report))
}
