use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::review::{CreateReviewRequest, ReviewResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Review submitted", body = ReviewResponse),
        (status = 400, description = "Invalid rating or self-review"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Cannot review on behalf of another user")
    ),
    tag = "reviews"
)]
pub async fn create_review(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_distinct()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;
    user.ensure_self_or_admin(req.reviewer_id)?;

    let review = services::create_review(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(review)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/reviews/{reviewee_id}",
    params(
        ("reviewee_id" = Uuid, Path, description = "Reviewed user")
    ),
    responses(
        (status = 200, description = "Reviews received, newest first", body = Vec<ReviewResponse>)
    ),
    tag = "reviews"
)]
pub async fn list_reviews(
    State(db): State<Database>,
    Path(reviewee_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let reviews = services::list_reviews(db.pool(), reviewee_id).await?;

    Ok(Json(reviews).into_response())
}
