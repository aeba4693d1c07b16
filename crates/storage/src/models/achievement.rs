use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Achievement {
    pub achievement_id: i32,
    pub user_id: Uuid,
    pub title: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Education {
    pub education_id: i32,
    pub user_id: Uuid,
    pub school: String,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub end_year: Option<i32>,
}
