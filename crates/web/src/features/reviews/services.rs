use sqlx::PgPool;
use storage::{
    dto::review::{CreateReviewRequest, ReviewResponse},
    error::Result,
    repository::{ReviewRepository, UserRepository},
};
use uuid::Uuid;

use crate::features::tolerate;

pub async fn create_review(pool: &PgPool, req: &CreateReviewRequest) -> Result<ReviewResponse> {
    let review = ReviewRepository::new(pool).create(req).await?;

    let reviewer_name = tolerate(
        UserRepository::new(pool)
            .find_by_id(req.reviewer_id)
            .await
            .map(|user| Some(user.fullname)),
        "reviewer name",
    );

    Ok(ReviewResponse::new(review, reviewer_name))
}

pub async fn list_reviews(pool: &PgPool, reviewee_id: Uuid) -> Result<Vec<ReviewResponse>> {
    let reviews = ReviewRepository::new(pool)
        .list_for_reviewee(reviewee_id)
        .await?;

    Ok(reviews.into_iter().map(ReviewResponse::from).collect())
}
