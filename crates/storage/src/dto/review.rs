use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{ReviewWithReviewer, UserReview};

const ANONYMOUS: &str = "Anonymous";

/// Request payload for reviewing another user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReviewRequest {
    pub reviewer_id: Uuid,

    pub reviewee_id: Uuid,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i16,

    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

impl CreateReviewRequest {
    pub fn validate_distinct(&self) -> Result<(), &'static str> {
        if self.reviewer_id == self.reviewee_id {
            return Err("You cannot review yourself.");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponse {
    pub review_id: Uuid,
    pub reviewer_id: Uuid,
    pub reviewee_id: Uuid,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub reviewer_name: String,
    pub reviewer_avatar: Option<String>,
}

impl ReviewResponse {
    pub fn new(review: UserReview, reviewer_name: Option<String>) -> Self {
        Self {
            review_id: review.review_id,
            reviewer_id: review.reviewer_id,
            reviewee_id: review.reviewee_id,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
            reviewer_name: reviewer_name.unwrap_or_else(|| ANONYMOUS.to_string()),
            reviewer_avatar: None,
        }
    }
}

impl From<ReviewWithReviewer> for ReviewResponse {
    fn from(row: ReviewWithReviewer) -> Self {
        Self {
            review_id: row.review_id,
            reviewer_id: row.reviewer_id,
            reviewee_id: row.reviewee_id,
            rating: row.rating,
            comment: row.comment,
            created_at: row.created_at,
            reviewer_name: row.reviewer_name.unwrap_or_else(|| ANONYMOUS.to_string()),
            reviewer_avatar: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(rating: i16) -> CreateReviewRequest {
        CreateReviewRequest {
            reviewer_id: Uuid::new_v4(),
            reviewee_id: Uuid::new_v4(),
            rating,
            comment: Some("Great teammate".to_string()),
        }
    }

    #[test]
    fn test_rating_bounds() {
        assert!(request(1).validate().is_ok());
        assert!(request(5).validate().is_ok());
        assert!(request(0).validate().is_err());
        assert!(request(6).validate().is_err());
    }

    #[test]
    fn test_self_review_rejected() {
        let mut req = request(4);
        req.reviewee_id = req.reviewer_id;
        assert!(req.validate_distinct().is_err());
    }
}
