use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{PgPool, Result};
use tracing::info;
use uuid::Uuid;

use crate::analysis::models::AnalysisResult;
use crate::models::analysis::{AnalysisRow, AnalysisSummaryRow};
use crate::models::job_description::JobDescriptionRow;
use crate::models::resume::ResumeRow;

/// Persists an engine result for the (résumé, job description) pair it was computed from.
pub async fn insert_analysis(
    pool: &PgPool,
    resume: &ResumeRow,
    jd: &JobDescriptionRow,
    result: AnalysisResult,
) -> Result<AnalysisRow> {
    let (id, timestamp): (Uuid, DateTime<Utc>) = sqlx::query_as(
        r#"
        INSERT INTO analysis_results
            (user_id, resume_id, job_description_id, overall_score, categories, recommendations)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, timestamp
        "#,
    )
    .bind(resume.user_id)
    .bind(resume.id)
    .bind(jd.id)
    .bind(result.overall_score as i32)
    .bind(Json(result.categories.clone()))
    .bind(&result.recommendations)
    .fetch_one(pool)
    .await?;

    info!(
        "Stored analysis {id} (resume {}, job description {}, score {})",
        resume.id, jd.id, result.overall_score
    );

    Ok(AnalysisRow {
        id,
        user_id: resume.user_id,
        resume_id: resume.id,
        resume_name: resume.name.clone(),
        job_description_id: jd.id,
        job_title: jd.title.clone(),
        overall_score: result.overall_score as i32,
        categories: Json(result.categories),
        recommendations: result.recommendations,
        timestamp,
    })
}

/// Newest first.
pub async fn list_analyses(pool: &PgPool, user_id: Uuid) -> Result<Vec<AnalysisSummaryRow>> {
    Ok(sqlx::query_as::<_, AnalysisSummaryRow>(
        r#"
        SELECT a.id, a.resume_id, r.name AS resume_name,
               a.job_description_id, j.title AS job_title,
               a.overall_score, a.timestamp
        FROM analysis_results a
        JOIN resumes r ON r.id = a.resume_id
        JOIN job_descriptions j ON j.id = a.job_description_id
        WHERE a.user_id = $1
        ORDER BY a.timestamp DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

pub async fn get_analysis(
    pool: &PgPool,
    user_id: Uuid,
    analysis_id: Uuid,
) -> Result<Option<AnalysisRow>> {
    Ok(sqlx::query_as::<_, AnalysisRow>(
        r#"
        SELECT a.id, a.user_id, a.resume_id, r.name AS resume_name,
               a.job_description_id, j.title AS job_title,
               a.overall_score, a.categories, a.recommendations, a.timestamp
        FROM analysis_results a
        JOIN resumes r ON r.id = a.resume_id
        JOIN job_descriptions j ON j.id = a.job_description_id
        WHERE a.id = $1 AND a.user_id = $2
        "#,
    )
    .bind(analysis_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?)
}
