//! Axum route handlers for the Resume API.

use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extractors::{ApiMultipart, ApiPath, ApiQuery};
use crate::models::resume::ResumeRow;
use crate::models::MAX_NAME_CHARS;
use crate::resumes::extract::{extract_text, UploadedDocument};
use crate::resumes::store::{delete_resume, get_resume, insert_resume, list_resumes, NewResume};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// POST /api/v1/resumes?user_id=
///
/// Multipart upload with a single `file` field. The text is extracted before
/// anything is stored, so unsupported documents never reach the database.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
    ApiMultipart(mut multipart): ApiMultipart,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let document = read_file_field(&mut multipart).await?;

    if document.bytes.len() > state.config.max_upload_bytes {
        return Err(AppError::Validation(format!(
            "File exceeds the {} byte upload limit",
            state.config.max_upload_bytes
        )));
    }

    if document.file_name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::Validation(format!(
            "File name cannot exceed {MAX_NAME_CHARS} characters"
        )));
    }

    let file_size = i32::try_from(document.bytes.len())
        .map_err(|_| AppError::Validation("File is too large".to_string()))?;
    let file_name = document.file_name.clone();

    let (kind, content) = tokio::task::spawn_blocking(move || extract_text(&document))
        .await
        .map_err(|e| anyhow!("text extraction task failed: {e}"))??;

    info!(
        "Extracted {} chars from {file_name} ({})",
        content.len(),
        kind.mime_type()
    );

    let row = insert_resume(
        &state.db,
        NewResume {
            user_id: params.user_id,
            name: &file_name,
            content: &content,
            file_type: kind.mime_type(),
            file_size,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/resumes?user_id=
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    Ok(Json(list_resumes(&state.db, params.user_id).await?))
}

/// GET /api/v1/resumes/:id?user_id=
pub async fn handle_get_resume(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<Json<ResumeRow>, AppError> {
    get_resume(&state.db, params.user_id, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

/// DELETE /api/v1/resumes/:id?user_id=
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    if delete_resume(&state.db, params.user_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Resume {id} not found")))
    }
}

async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedDocument, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(String::from);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        return Ok(UploadedDocument {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}
