use sqlx::PgPool;
use storage::{
    dto::event::{
        CreateEventRequest, EventDetailResponse, EventWithRelations, UpdateEventRequest,
    },
    error::Result,
    models::{Event, EventCategory, Sponsor},
    repository::{EventRepository, ParticipantRepository},
};
use uuid::Uuid;

use crate::features::tolerate;

/// List all events ordered by start time
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>> {
    EventRepository::new(pool).list().await
}

pub async fn get_event(pool: &PgPool, id: Uuid) -> Result<Event> {
    EventRepository::new(pool).find_by_id(id).await
}

pub async fn list_categories(pool: &PgPool) -> Result<Vec<EventCategory>> {
    EventRepository::new(pool).list_categories().await
}

pub async fn list_sponsors(pool: &PgPool) -> Result<Vec<Sponsor>> {
    EventRepository::new(pool).list_sponsors().await
}

pub async fn create_event(
    pool: &PgPool,
    organizer_id: Uuid,
    req: &CreateEventRequest,
) -> Result<EventWithRelations> {
    let event = EventRepository::new(pool).create(organizer_id, req).await?;

    tracing::info!(
        event_id = %event.event.event_id,
        organizer_id = %organizer_id,
        "Event created"
    );

    Ok(event)
}

/// Event page data; tags and participant count fall back to empty values when their reads fail
pub async fn get_event_details(pool: &PgPool, id: Uuid) -> Result<EventDetailResponse> {
    let repo = EventRepository::new(pool);
    let event = repo.find_by_id(id).await?;

    let details = match repo.with_relations(event.clone()).await {
        Ok(details) => details,
        Err(e) => {
            tracing::warn!(event_id = %id, error = %e, "Failed to load event tags");
            EventWithRelations {
                status: event.status(),
                event,
                categories: Vec::new(),
                category_ids: Vec::new(),
                sponsors: Vec::new(),
                sponsor_ids: Vec::new(),
            }
        }
    };

    let participant_count = tolerate(
        ParticipantRepository::new(pool).count(id).await,
        "participant count",
    );

    Ok(EventDetailResponse {
        details,
        participant_count,
    })
}

pub async fn update_event(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateEventRequest,
) -> Result<EventWithRelations> {
    EventRepository::new(pool)
        .update_with_relations(id, req)
        .await
}

/// Scalar-only edit; the event keeps its categories and sponsors
pub async fn update_event_fields(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateEventRequest,
) -> Result<EventWithRelations> {
    let event = EventRepository::new(pool).update_fields(id, req).await?;

    tracing::info!(event_id = %id, "Event fields updated");

    Ok(event)
}

pub async fn delete_event(pool: &PgPool, id: Uuid) -> Result<()> {
    EventRepository::new(pool).delete(id).await?;

    tracing::info!(event_id = %id, "Event deleted");

    Ok(())
}
