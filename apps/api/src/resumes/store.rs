use sqlx::{PgPool, Result};
use tracing::info;
use uuid::Uuid;

use crate::models::resume::ResumeRow;

pub struct NewResume<'a> {
    pub user_id: Uuid,
    pub name: &'a str,
    pub content: &'a str,
    pub file_type: &'a str,
    pub file_size: i32,
}

pub async fn insert_resume(pool: &PgPool, resume: NewResume<'_>) -> Result<ResumeRow> {
    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (user_id, name, content, file_type, file_size)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(resume.user_id)
    .bind(resume.name)
    .bind(resume.content)
    .bind(resume.file_type)
    .bind(resume.file_size)
    .fetch_one(pool)
    .await?;

    info!("Stored resume {} for user {}", row.id, row.user_id);
    Ok(row)
}

/// Newest uploads first.
pub async fn list_resumes(pool: &PgPool, user_id: Uuid) -> Result<Vec<ResumeRow>> {
    Ok(sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY upload_date DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

pub async fn get_resume(pool: &PgPool, user_id: Uuid, resume_id: Uuid) -> Result<Option<ResumeRow>> {
    Ok(sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE id = $1 AND user_id = $2",
    )
    .bind(resume_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?)
}

/// Returns `false` when no row belonged to the user.
pub async fn delete_resume(pool: &PgPool, user_id: Uuid, resume_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(resume_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() > 0 {
        info!("Deleted resume {resume_id} for user {user_id}");
    }
    Ok(result.rows_affected() > 0)
}
