//! Axum route handlers for the Job Description API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::job_descriptions::store::{
    delete_job_description, get_job_description, insert_job_description, list_job_descriptions,
    NewJobDescription,
};
use crate::models::job_description::JobDescriptionRow;
use crate::models::MAX_NAME_CHARS;
use crate::resumes::handlers::UserIdQuery;
use crate::state::AppState;

/// Where the posting text came from. Scraping is done client-side; `url` only records the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSource {
    #[default]
    Manual,
    Url,
}

impl JobSource {
    pub fn as_str(self) -> &'static str {
        match self {
            JobSource::Manual => "manual",
            JobSource::Url => "url",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveJobDescriptionRequest {
    pub user_id: Uuid,
    pub title: String,
    pub company: Option<String>,
    pub content: String,
    #[serde(default)]
    pub source: JobSource,
    pub url: Option<String>,
}

impl SaveJobDescriptionRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title cannot be empty".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(AppError::Validation("content cannot be empty".to_string()));
        }
        if self.source == JobSource::Url && non_blank(&self.url).is_none() {
            return Err(AppError::Validation(
                "url is required when source is 'url'".to_string(),
            ));
        }
        check_length("title", Some(self.title.trim()))?;
        check_length("company", non_blank(&self.company))?;
        check_length("url", non_blank(&self.url))?;
        Ok(())
    }
}

/// POST /api/v1/job-descriptions
pub async fn handle_save_job_description(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SaveJobDescriptionRequest>,
) -> Result<(StatusCode, Json<JobDescriptionRow>), AppError> {
    request.validate()?;

    let row = insert_job_description(
        &state.db,
        NewJobDescription {
            user_id: request.user_id,
            title: request.title.trim(),
            company: non_blank(&request.company),
            content: &request.content,
            source: request.source.as_str(),
            url: non_blank(&request.url),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/job-descriptions?user_id=
pub async fn handle_list_job_descriptions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<Json<Vec<JobDescriptionRow>>, AppError> {
    Ok(Json(list_job_descriptions(&state.db, params.user_id).await?))
}

/// GET /api/v1/job-descriptions/:id?user_id=
pub async fn handle_get_job_description(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<Json<JobDescriptionRow>, AppError> {
    get_job_description(&state.db, params.user_id, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job description {id} not found")))
}

/// DELETE /api/v1/job-descriptions/:id?user_id=
pub async fn handle_delete_job_description(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    if delete_job_description(&state.db, params.user_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Job description {id} not found")))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn check_length(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(v) if v.chars().count() > MAX_NAME_CHARS => Err(AppError::Validation(format!(
            "{field} cannot exceed {MAX_NAME_CHARS} characters"
        ))),
        _ => Ok(()),
    }
}
