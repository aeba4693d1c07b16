use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::review::CreateReviewRequest;
use crate::error::{Result, StorageError};
use crate::models::{ReviewWithReviewer, UserReview};

pub struct ReviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &CreateReviewRequest) -> Result<UserReview> {
        let review = sqlx::query_as::<_, UserReview>(
            r#"
            INSERT INTO user_review (reviewer_id, reviewee_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING review_id, reviewer_id, reviewee_id, rating, comment, created_at
            "#,
        )
        .bind(req.reviewer_id)
        .bind(req.reviewee_id)
        .bind(req.rating)
        .bind(&req.comment)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).classify("Review already exists", "Unknown user"))?;

        Ok(review)
    }

    /// Reviews received by a user, newest first
    pub async fn list_for_reviewee(&self, reviewee_id: Uuid) -> Result<Vec<ReviewWithReviewer>> {
        let reviews = sqlx::query_as::<_, ReviewWithReviewer>(
            r#"
            SELECT r.review_id, r.reviewer_id, r.reviewee_id, r.rating, r.comment, r.created_at,
                   u.fullname AS reviewer_name
            FROM user_review r
            LEFT JOIN users u ON u.user_id = r.reviewer_id
            WHERE r.reviewee_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(reviewee_id)
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }
}
