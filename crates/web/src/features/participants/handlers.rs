use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{CountResponse, MessageResponse},
        participant::{HasJoinedResponse, ParticipantsResponse, ParticipationRequest},
    },
};
use uuid::Uuid;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    post,
    path = "/api/event-participants/{event_id}/join",
    params(
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    request_body = ParticipationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Joined the event", body = MessageResponse),
        (status = 400, description = "Sport does not match the event"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Cannot join on behalf of another user"),
        (status = 404, description = "Event or user not found"),
        (status = 409, description = "Already joined")
    ),
    tag = "participants"
)]
pub async fn join_event(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<ParticipationRequest>,
) -> Result<Response, WebError> {
    user.ensure_self_or_admin(req.user_id)?;

    services::join(db.pool(), event_id, req.user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Successfully joined the event")),
    )
        .into_response())
}

#[utoipa::path(
    delete,
    path = "/api/event-participants/{event_id}/leave",
    params(
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    request_body = ParticipationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Left the event", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Cannot leave on behalf of another user"),
        (status = 404, description = "Not a participant")
    ),
    tag = "participants"
)]
pub async fn leave_event(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<ParticipationRequest>,
) -> Result<Response, WebError> {
    user.ensure_self_or_admin(req.user_id)?;

    services::leave(db.pool(), event_id, req.user_id).await?;

    Ok(Json(MessageResponse::new("Successfully left the event")).into_response())
}

#[utoipa::path(
    get,
    path = "/api/event-participants/{event_id}/participants",
    params(
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Participants in join order", body = ParticipantsResponse)
    ),
    tag = "participants"
)]
pub async fn list_participants(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let participants = services::list_participants(db.pool(), event_id).await?;

    Ok(Json(ParticipantsResponse { participants }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/event-participants/{event_id}/count",
    params(
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Number of participants", body = CountResponse)
    ),
    tag = "participants"
)]
pub async fn count_participants(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let count = services::count(db.pool(), event_id).await?;

    Ok(Json(CountResponse { count }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/event-participants/{event_id}/check/{user_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event id"),
        ("user_id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Whether the user has joined", body = HasJoinedResponse)
    ),
    tag = "participants"
)]
pub async fn check_participation(
    State(db): State<Database>,
    Path((event_id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    let has_joined = services::has_joined(db.pool(), event_id, user_id).await?;

    Ok(Json(HasJoinedResponse { has_joined }).into_response())
}
