use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    /// Plain text extracted from the uploaded document.
    pub content: String,
    pub file_type: String,
    pub file_size: i32,
    pub upload_date: DateTime<Utc>,
}
