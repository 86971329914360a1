//! Axum route handlers for the Analysis API.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::analysis::report::{render_report, REPORT_FILE_NAME};
use crate::analysis::service::{rerun_analysis, run_analysis};
use crate::analysis::store::{get_analysis, list_analyses};
use crate::errors::AppError;
use crate::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::models::analysis::{AnalysisRow, AnalysisSummaryRow};
use crate::resumes::handlers::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub user_id: Uuid,
    pub resume_id: Uuid,
    pub job_description_id: Uuid,
}

/// POST /api/v1/analyses
pub async fn handle_analyze(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeRequest>,
) -> Result<(StatusCode, Json<AnalysisRow>), AppError> {
    let row = run_analysis(
        &state.db,
        &state.rng_source,
        request.user_id,
        request.resume_id,
        request.job_description_id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// POST /api/v1/analyses/:id/rerun?user_id=
pub async fn handle_rerun_analysis(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<(StatusCode, Json<AnalysisRow>), AppError> {
    let row = rerun_analysis(&state.db, &state.rng_source, params.user_id, id).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/analyses?user_id=
pub async fn handle_analysis_history(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<Json<Vec<AnalysisSummaryRow>>, AppError> {
    Ok(Json(list_analyses(&state.db, params.user_id).await?))
}

/// GET /api/v1/analyses/:id?user_id=
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<Json<AnalysisRow>, AppError> {
    find_analysis(&state, params.user_id, id).await.map(Json)
}

/// GET /api/v1/analyses/:id/report?user_id=
///
/// Markdown download of the stored analysis.
pub async fn handle_download_report(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let analysis = find_analysis(&state, params.user_id, id).await?;
    let body = render_report(&analysis);

    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        body,
    ))
}

async fn find_analysis(state: &AppState, user_id: Uuid, id: Uuid) -> Result<AnalysisRow, AppError> {
    get_analysis(&state.db, user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}
