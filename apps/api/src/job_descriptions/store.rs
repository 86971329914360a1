use sqlx::{PgPool, Result};
use tracing::info;
use uuid::Uuid;

use crate::models::job_description::JobDescriptionRow;

pub struct NewJobDescription<'a> {
    pub user_id: Uuid,
    pub title: &'a str,
    pub company: Option<&'a str>,
    pub content: &'a str,
    pub source: &'a str,
    pub url: Option<&'a str>,
}

pub async fn insert_job_description(
    pool: &PgPool,
    jd: NewJobDescription<'_>,
) -> Result<JobDescriptionRow> {
    let row = sqlx::query_as::<_, JobDescriptionRow>(
        r#"
        INSERT INTO job_descriptions (user_id, title, company, content, source, url)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(jd.user_id)
    .bind(jd.title)
    .bind(jd.company)
    .bind(jd.content)
    .bind(jd.source)
    .bind(jd.url)
    .fetch_one(pool)
    .await?;

    info!("Stored job description {} for user {}", row.id, row.user_id);
    Ok(row)
}

/// Most recently saved first.
pub async fn list_job_descriptions(pool: &PgPool, user_id: Uuid) -> Result<Vec<JobDescriptionRow>> {
    Ok(sqlx::query_as::<_, JobDescriptionRow>(
        "SELECT * FROM job_descriptions WHERE user_id = $1 ORDER BY save_date DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

pub async fn get_job_description(
    pool: &PgPool,
    user_id: Uuid,
    jd_id: Uuid,
) -> Result<Option<JobDescriptionRow>> {
    Ok(sqlx::query_as::<_, JobDescriptionRow>(
        "SELECT * FROM job_descriptions WHERE id = $1 AND user_id = $2",
    )
    .bind(jd_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?)
}

pub async fn delete_job_description(pool: &PgPool, user_id: Uuid, jd_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM job_descriptions WHERE id = $1 AND user_id = $2")
        .bind(jd_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
