use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{CountResponse, MessageResponse},
        follow::{FollowRequest, IsFollowingQuery, IsFollowingResponse},
    },
};
use uuid::Uuid;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    post,
    path = "/api/follows/follow",
    request_body = FollowRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Now following", body = MessageResponse),
        (status = 400, description = "Cannot follow yourself or unknown user"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Cannot follow on behalf of another user"),
        (status = 409, description = "Already following")
    ),
    tag = "follows"
)]
pub async fn follow_user(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<FollowRequest>,
) -> Result<Response, WebError> {
    req.validate_distinct()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;
    user.ensure_self_or_admin(req.follower_id)?;

    services::follow(db.pool(), req.follower_id, req.following_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Followed successfully")),
    )
        .into_response())
}

#[utoipa::path(
    delete,
    path = "/api/follows/unfollow",
    request_body = FollowRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Unfollowed", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Cannot unfollow on behalf of another user"),
        (status = 404, description = "Not following")
    ),
    tag = "follows"
)]
pub async fn unfollow_user(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<FollowRequest>,
) -> Result<Response, WebError> {
    user.ensure_self_or_admin(req.follower_id)?;

    services::unfollow(db.pool(), req.follower_id, req.following_id).await?;

    Ok(Json(MessageResponse::new("Unfollowed successfully")).into_response())
}

#[utoipa::path(
    get,
    path = "/api/follows/is-following",
    params(IsFollowingQuery),
    responses(
        (status = 200, description = "Whether the follow exists", body = IsFollowingResponse)
    ),
    tag = "follows"
)]
pub async fn is_following(
    State(db): State<Database>,
    Query(query): Query<IsFollowingQuery>,
) -> Result<Response, WebError> {
    let is_following =
        services::is_following(db.pool(), query.follower_id, query.following_id).await?;

    Ok(Json(IsFollowingResponse { is_following }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/follows/{user_id}/followers",
    params(
        ("user_id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Number of followers", body = CountResponse)
    ),
    tag = "follows"
)]
pub async fn follower_count(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let count = services::follower_count(db.pool(), user_id).await?;

    Ok(Json(CountResponse { count }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/follows/{user_id}/following",
    params(
        ("user_id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Number of users followed", body = CountResponse)
    ),
    tag = "follows"
)]
pub async fn following_count(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let count = services::following_count(db.pool(), user_id).await?;

    Ok(Json(CountResponse { count }).into_response())
}
