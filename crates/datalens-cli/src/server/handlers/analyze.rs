//! Analysis handler.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use datalens::{AnalysisRequest, AnalysisResult};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Run one analysis on a dataset and return chart data.
pub async fn analyze_dataset(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    tracing::debug!(
        dataset = %id,
        analysis_type = ?request.analysis_type,
        column = ?request.column,
        "analyze request"
    );

    let result = state
        .run(move |datalens| datalens.analyze(&id, &request))
        .await?;
    Ok(Json(result))
}
