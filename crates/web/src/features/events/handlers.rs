use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::event::{
        CreateEventRequest, EventDetailResponse, EventResponse, EventUpdatedResponse,
        EventWithRelations, UpdateEventRequest,
    },
    models::{EventCategory, Sponsor},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "All events with their status", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Response, WebError> {
    let events = services::list_events(db.pool()).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/categories",
    responses(
        (status = 200, description = "All event categories", body = Vec<EventCategory>)
    ),
    tag = "events"
)]
pub async fn list_categories(State(db): State<Database>) -> Result<Response, WebError> {
    let categories = services::list_categories(db.pool()).await?;

    Ok(Json(categories).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/sponsors",
    responses(
        (status = 200, description = "All sponsors", body = Vec<Sponsor>)
    ),
    tag = "events"
)]
pub async fn list_sponsors(State(db): State<Database>) -> Result<Response, WebError> {
    let sponsors = services::list_sponsors(db.pool()).await?;

    Ok(Json(sponsors).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::get_event(db.pool(), id).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/details",
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event with categories, sponsors and participant count", body = EventDetailResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event_details(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let details = services::get_event_details(db.pool(), id).await?;

    Ok(Json(details).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event created successfully", body = EventWithRelations),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only organizers can create events")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    user.ensure_organizer()?;

    let organizer_id = req.organizer_id.unwrap_or(user.user_id);
    user.ensure_self_or_admin(organizer_id)?;

    req.validate()?;
    req.validate_schedule()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let event = services::create_event(db.pool(), organizer_id, &req).await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    request_body = UpdateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event and its categories and sponsors updated", body = EventUpdatedResponse),
        (status = 400, description = "Validation error or unknown category/sponsor id"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the organizer of this event"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.relations
        .validate_names()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let existing = services::get_event(db.pool(), id).await?;
    user.ensure_self_or_admin(existing.organizer_id)?;

    let event = services::update_event(db.pool(), id, &req).await?;

    Ok(Json(EventUpdatedResponse {
        message: "Event updated successfully".to_string(),
        event,
    })
    .into_response())
}

#[utoipa::path(
    put,
    path = "/api/events/{id}/simple",
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    request_body = UpdateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event fields updated; categories and sponsors unchanged", body = EventUpdatedResponse),
        (status = 400, description = "Validation error or no fields to update"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the organizer of this event"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn update_event_fields(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    if !req.has_field_changes() {
        return Err(WebError::BadRequest("No valid fields to update".to_string()));
    }

    let existing = services::get_event(db.pool(), id).await?;
    user.ensure_self_or_admin(existing.organizer_id)?;

    let event = services::update_event_fields(db.pool(), id, &req).await?;

    Ok(Json(EventUpdatedResponse {
        message: "Event updated successfully".to_string(),
        event,
    })
    .into_response())
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Event deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the organizer of this event"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let existing = services::get_event(db.pool(), id).await?;
    user.ensure_self_or_admin(existing.organizer_id)?;

    services::delete_event(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
