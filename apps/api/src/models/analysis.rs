use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::analysis::models::Categories;

/// A stored analysis joined with the résumé name and job title it was run against.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub resume_id: Uuid,
    pub resume_name: String,
    pub job_description_id: Uuid,
    pub job_title: String,
    pub overall_score: i32,
    pub categories: Json<Categories>,
    pub recommendations: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// History listing entry; omits the category payloads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisSummaryRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub resume_name: String,
    pub job_description_id: Uuid,
    pub job_title: String,
    pub overall_score: i32,
    pub timestamp: DateTime<Utc>,
}
