use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserReview {
    pub review_id: Uuid,
    pub reviewer_id: Uuid,
    pub reviewee_id: Uuid,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

/// Review joined with the reviewer's display name.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewWithReviewer {
    pub review_id: Uuid,
    pub reviewer_id: Uuid,
    pub reviewee_id: Uuid,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub reviewer_name: Option<String>,
}
